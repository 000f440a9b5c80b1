use std::cell::RefCell;
use std::rc::Rc;

use crate::activation::Activation;
use crate::error::{PlaygroundError, Result};
use crate::math::init::WeightSampler;

/// Shared handle to a neuron.
///
/// A neuron is owned by its layer and also referenced from the `last_input`
/// of every downstream neuron that read it, so backpropagation can walk
/// upstream through the exact neurons used in the forward pass.
pub type NeuronRef = Rc<RefCell<Neuron>>;

const UNIT_WEIGHT: [f64; 1] = [1.0];

/// The three neuron variants.
#[derive(Debug)]
pub enum Neuron {
    /// A fixed scalar with no trainable state.
    Input { value: f64 },
    Sigmoid(WeightedNeuron),
    ReLU(WeightedNeuron),
}

impl Neuron {
    pub fn input(value: f64) -> Neuron {
        Neuron::Input { value }
    }

    /// Builds a weighted neuron with `num_inputs + 1` sampled weights.
    pub fn weighted(activation: Activation, num_inputs: usize, sampler: &mut dyn WeightSampler) -> Neuron {
        let inner = WeightedNeuron::new(num_inputs, sampler);
        match activation {
            Activation::Sigmoid => Neuron::Sigmoid(inner),
            Activation::ReLU => Neuron::ReLU(inner),
        }
    }

    pub fn into_ref(self) -> NeuronRef {
        Rc::new(RefCell::new(self))
    }

    /// `None` for input neurons.
    pub fn activation(&self) -> Option<Activation> {
        match self {
            Neuron::Input { .. } => None,
            Neuron::Sigmoid(_) => Some(Activation::Sigmoid),
            Neuron::ReLU(_) => Some(Activation::ReLU),
        }
    }

    /// Evaluates against the given upstream neurons. Input neurons ignore
    /// `inputs` and return their value.
    pub fn evaluate(&mut self, inputs: &[NeuronRef]) -> f64 {
        match self {
            Neuron::Input { value } => *value,
            Neuron::Sigmoid(n) => n.evaluate(inputs, Activation::Sigmoid),
            Neuron::ReLU(n) => n.evaluate(inputs, Activation::ReLU),
        }
    }

    /// Output of the most recent `evaluate`; an input neuron's value.
    pub fn last_value(&self) -> f64 {
        match self {
            Neuron::Input { value } => *value,
            Neuron::Sigmoid(n) | Neuron::ReLU(n) => n.last_value,
        }
    }

    /// Bias first. Input neurons report `[1]`.
    pub fn weights(&self) -> &[f64] {
        match self {
            Neuron::Input { .. } => &UNIT_WEIGHT,
            Neuron::Sigmoid(n) | Neuron::ReLU(n) => &n.weights,
        }
    }

    /// Pushes the error signal `target` (desired minus actual, already
    /// chain-multiplied by everything downstream) into this neuron: first
    /// recursively into every neuron it read on the last evaluate, then into
    /// its own weights.
    pub fn back_propagate(&mut self, target: f64, learning_rate: f64) -> Result<()> {
        match self {
            Neuron::Input { .. } => Ok(()),
            Neuron::Sigmoid(n) => n.back_propagate(target, learning_rate, Activation::Sigmoid),
            Neuron::ReLU(n) => n.back_propagate(target, learning_rate, Activation::ReLU),
        }
    }
}

/// State shared by the Sigmoid and ReLU variants.
#[derive(Debug)]
pub struct WeightedNeuron {
    weights: Vec<f64>,
    last_input: Vec<NeuronRef>,
    last_value: f64,
}

impl WeightedNeuron {
    fn new(num_inputs: usize, sampler: &mut dyn WeightSampler) -> WeightedNeuron {
        WeightedNeuron {
            weights: (0..=num_inputs).map(|_| sampler.sample()).collect(),
            last_input: Vec::new(),
            last_value: 0.0,
        }
    }

    /// Inputs this neuron was built for, bias excluded.
    pub fn num_inputs(&self) -> usize {
        self.weights.len() - 1
    }

    fn evaluate(&mut self, inputs: &[NeuronRef], activation: Activation) -> f64 {
        self.last_input = std::iter::once(Neuron::input(1.0).into_ref())
            .chain(inputs.iter().cloned())
            .collect();

        let z: f64 = self.weights.iter()
            .zip(self.last_input.iter())
            .map(|(w, input)| w * input.borrow().last_value())
            .sum();

        self.last_value = activation.function(z);
        self.last_value
    }

    fn back_propagate(&mut self, target: f64, learning_rate: f64, activation: Activation) -> Result<()> {
        if self.last_input.len() != self.weights.len() {
            return Err(PlaygroundError::validation(format!(
                "back-propagation through a neuron with {} weights that last read {} inputs \
                 (was it evaluated?)",
                self.weights.len(),
                self.last_input.len(),
            )));
        }

        let slope = activation.derivative_from_output(self.last_value);

        // An inactive ReLU sends nothing upstream.
        if slope != 0.0 {
            for (w, input) in self.weights.iter().zip(self.last_input.iter()) {
                input.borrow_mut().back_propagate(w * slope * target, learning_rate)?;
            }
        }

        for (w, input) in self.weights.iter_mut().zip(self.last_input.iter()) {
            *w += learning_rate * input.borrow().last_value() * slope * target;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::math::init::StandardNormalSampler;

    fn fixed(weights: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut it = weights.iter().copied();
        move || it.next().unwrap_or(0.0)
    }

    fn inputs(values: &[f64]) -> Vec<NeuronRef> {
        values.iter().map(|&v| Neuron::input(v).into_ref()).collect()
    }

    #[test]
    fn input_neuron_is_inert() {
        let mut n = Neuron::input(0.75);
        assert_eq!(n.evaluate(&[]), 0.75);
        assert_eq!(n.weights(), &[1.0]);
        n.back_propagate(10.0, 0.5).unwrap();
        n.back_propagate(-3.0, 0.5).unwrap();
        assert_eq!(n.evaluate(&inputs(&[9.0])), 0.75);
        assert_eq!(n.last_value(), 0.75);
    }

    #[test]
    fn sigmoid_uses_bias_and_every_input() {
        let mut n = Neuron::weighted(Activation::Sigmoid, 2, &mut fixed(&[0.5, -1.0, 2.0]));
        let out = n.evaluate(&inputs(&[3.0, 0.25]));
        let z: f64 = 0.5 - 3.0 + 0.5;
        assert_relative_eq!(out, 1.0 / (1.0 + (-z).exp()));
        assert_eq!(n.last_value(), out);
    }

    #[test]
    fn weights_track_last_input_after_evaluate() {
        let mut n = Neuron::weighted(Activation::ReLU, 4, &mut StandardNormalSampler::seeded(3));
        assert_eq!(n.weights().len(), 5);
        n.evaluate(&inputs(&[0.1, 0.2, 0.3, 0.4]));
        match &n {
            Neuron::ReLU(w) => {
                assert_eq!(w.last_input.len(), w.weights.len());
                assert_eq!(w.last_input[0].borrow().last_value(), 1.0);
                assert_eq!(w.num_inputs(), 4);
            }
            other => panic!("expected ReLU, got {other:?}"),
        }
    }

    #[test]
    fn relu_never_goes_negative() {
        let mut sampler = StandardNormalSampler::seeded(11);
        for _ in 0..50 {
            let mut n = Neuron::weighted(Activation::ReLU, 3, &mut sampler);
            assert!(n.evaluate(&inputs(&[1.0, -2.0, 0.5])) >= 0.0);
        }
    }

    #[test]
    fn sigmoid_update_follows_the_delta_rule() {
        let mut n = Neuron::weighted(Activation::Sigmoid, 1, &mut fixed(&[0.0, 0.0]));
        n.evaluate(&inputs(&[2.0]));
        // sigma(0) = 0.5, slope 0.25
        n.back_propagate(1.0, 0.1).unwrap();
        assert_relative_eq!(n.weights()[0], 0.1 * 1.0 * 0.25);
        assert_relative_eq!(n.weights()[1], 0.1 * 2.0 * 0.25);
    }

    #[test]
    fn inactive_relu_leaves_weights_and_upstream_alone() {
        let upstream = Neuron::weighted(Activation::Sigmoid, 1, &mut fixed(&[0.3, 0.7])).into_ref();
        upstream.borrow_mut().evaluate(&inputs(&[1.0]));
        let before_up = upstream.borrow().weights().to_vec();

        let mut n = Neuron::weighted(Activation::ReLU, 1, &mut fixed(&[-5.0, 1.0]));
        assert_eq!(n.evaluate(&[upstream.clone()]), 0.0);
        n.back_propagate(2.0, 0.2).unwrap();

        assert_eq!(n.weights(), &[-5.0, 1.0]);
        assert_eq!(upstream.borrow().weights(), before_up.as_slice());
    }

    #[test]
    fn active_relu_passes_unscaled_signal_upstream() {
        let upstream = Neuron::weighted(Activation::ReLU, 1, &mut fixed(&[0.0, 1.0])).into_ref();
        upstream.borrow_mut().evaluate(&inputs(&[2.0]));

        let mut n = Neuron::weighted(Activation::ReLU, 1, &mut fixed(&[0.0, 3.0]));
        assert_eq!(n.evaluate(&[upstream.clone()]), 6.0);
        n.back_propagate(0.5, 0.1).unwrap();

        // upstream receives w * target = 3 * 0.5 and updates with its input 2.0
        assert_relative_eq!(upstream.borrow().weights()[1], 1.0 + 0.1 * 2.0 * 1.5);
        // own update uses the upstream output 2.0
        assert_relative_eq!(n.weights()[1], 3.0 + 0.1 * 2.0 * 0.5);
    }

    #[test]
    fn back_propagate_before_evaluate_is_rejected() {
        let mut n = Neuron::weighted(Activation::Sigmoid, 2, &mut StandardNormalSampler::seeded(1));
        assert!(matches!(n.back_propagate(1.0, 0.1), Err(PlaygroundError::Validation(_))));
    }
}
