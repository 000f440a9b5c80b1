use crate::error::Result;
use crate::layers::Layer;
use crate::neuron::{Neuron, NeuronRef};

/// A fixed feature vector wrapped as input neurons.
#[derive(Debug)]
pub struct InputLayer {
    neurons: Vec<NeuronRef>,
}

impl InputLayer {
    pub fn new(values: &[f64]) -> InputLayer {
        InputLayer {
            neurons: values.iter().map(|&v| Neuron::input(v).into_ref()).collect(),
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.borrow().last_value()).collect()
    }
}

impl Layer for InputLayer {
    fn neurons(&self) -> &[NeuronRef] {
        &self.neurons
    }

    /// Ignores `inputs`.
    fn evaluate(&mut self, _inputs: &[NeuronRef]) -> Result<Vec<f64>> {
        Ok(self.values())
    }

    fn back_propagate(&mut self, _targets: &[f64], _learning_rate: f64) -> Result<()> {
        Ok(())
    }
}
