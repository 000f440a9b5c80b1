pub mod dense;
pub mod input;

pub use dense::InnerLayer;
pub use input::InputLayer;

use crate::error::Result;
use crate::neuron::NeuronRef;

/// Uniform contract shared by input and inner layers.
///
/// A layer evaluates against the previous layer's neuron handles (not their
/// raw values), so the cached per-neuron state of the forward pass is what
/// `back_propagate` later walks through.
pub trait Layer {
    /// Neurons this layer exposes as inputs to the next one.
    fn neurons(&self) -> &[NeuronRef];

    fn size(&self) -> usize {
        self.neurons().len()
    }

    fn evaluate(&mut self, inputs: &[NeuronRef]) -> Result<Vec<f64>>;

    /// `targets` holds one error signal per neuron.
    fn back_propagate(&mut self, targets: &[f64], learning_rate: f64) -> Result<()>;
}
