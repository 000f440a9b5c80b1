use crate::activation::Activation;
use crate::error::{PlaygroundError, Result};
use crate::layers::Layer;
use crate::math::init::WeightSampler;
use crate::neuron::{Neuron, NeuronRef};

/// A fully-connected layer: every neuron reads every input.
#[derive(Debug)]
pub struct InnerLayer {
    num_inputs: usize,
    activation: Activation,
    neurons: Vec<NeuronRef>,
}

impl InnerLayer {
    pub fn new(
        num_inputs: usize,
        num_outputs: usize,
        activation: Activation,
        sampler: &mut dyn WeightSampler,
    ) -> InnerLayer {
        let neurons = (0..num_outputs)
            .map(|_| Neuron::weighted(activation, num_inputs, sampler).into_ref())
            .collect();
        InnerLayer { num_inputs, activation, neurons }
    }

    /// Declared input arity, bias excluded.
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Copy of every neuron's weights, in neuron order.
    pub fn weights(&self) -> Vec<Vec<f64>> {
        self.neurons.iter().map(|n| n.borrow().weights().to_vec()).collect()
    }
}

impl Layer for InnerLayer {
    fn neurons(&self) -> &[NeuronRef] {
        &self.neurons
    }

    fn evaluate(&mut self, inputs: &[NeuronRef]) -> Result<Vec<f64>> {
        if inputs.len() != self.num_inputs {
            return Err(PlaygroundError::validation(format!(
                "layer expects {} inputs, got {}",
                self.num_inputs,
                inputs.len(),
            )));
        }
        Ok(self.neurons.iter().map(|n| n.borrow_mut().evaluate(inputs)).collect())
    }

    fn back_propagate(&mut self, targets: &[f64], learning_rate: f64) -> Result<()> {
        if targets.len() != self.neurons.len() {
            return Err(PlaygroundError::validation(format!(
                "layer has {} neurons, got {} error signals",
                self.neurons.len(),
                targets.len(),
            )));
        }
        // Each call recurses upstream and updates immediately; a neuron read
        // by several of ours is therefore updated once per reader.
        for (neuron, &target) in self.neurons.iter().zip(targets.iter()) {
            neuron.borrow_mut().back_propagate(target, learning_rate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::layers::InputLayer;
    use crate::math::init::StandardNormalSampler;

    #[test]
    fn builds_one_neuron_per_output_with_bias() {
        let layer = InnerLayer::new(5, 3, Activation::ReLU, &mut StandardNormalSampler::seeded(2));
        assert_eq!(layer.size(), 3);
        assert_eq!(layer.num_inputs(), 5);
        assert!(layer.weights().iter().all(|w| w.len() == 6));
        assert!(layer.neurons().iter().all(|n| n.borrow().activation() == Some(Activation::ReLU)));
    }

    #[test]
    fn every_neuron_sees_every_input() {
        // Same weights for both neurons -> same output when fan-out is full.
        let mut layer = InnerLayer::new(3, 2, Activation::Sigmoid, &mut || 0.4);
        let input = InputLayer::new(&[1.0, 2.0, -1.0]);
        let out = layer.evaluate(input.neurons()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], out[1]);
        assert_relative_eq!(out[0], Activation::Sigmoid.function(0.4 * (1.0 + 1.0 + 2.0 - 1.0)));
    }

    #[test]
    fn wrong_input_width_is_rejected() {
        let mut layer = InnerLayer::new(3, 2, Activation::Sigmoid, &mut StandardNormalSampler::seeded(2));
        let input = InputLayer::new(&[1.0, 2.0]);
        assert!(matches!(layer.evaluate(input.neurons()), Err(PlaygroundError::Validation(_))));
    }

    #[test]
    fn wrong_target_width_is_rejected() {
        let mut layer = InnerLayer::new(2, 2, Activation::Sigmoid, &mut StandardNormalSampler::seeded(2));
        let input = InputLayer::new(&[1.0, 2.0]);
        layer.evaluate(input.neurons()).unwrap();
        assert!(matches!(layer.back_propagate(&[0.1], 0.2), Err(PlaygroundError::Validation(_))));
    }

    #[test]
    fn shared_upstream_neuron_is_updated_once_per_reader() {
        let mut hidden = InnerLayer::new(1, 1, Activation::Sigmoid, &mut || 0.5);
        let input = InputLayer::new(&[1.0]);
        hidden.evaluate(input.neurons()).unwrap();

        let mut single = InnerLayer::new(1, 1, Activation::Sigmoid, &mut || 0.5);
        single.evaluate(hidden.neurons()).unwrap();
        single.back_propagate(&[1.0], 0.1).unwrap();
        let after_one = hidden.weights()[0].clone();

        let mut hidden2 = InnerLayer::new(1, 1, Activation::Sigmoid, &mut || 0.5);
        hidden2.evaluate(input.neurons()).unwrap();
        let mut double = InnerLayer::new(1, 2, Activation::Sigmoid, &mut || 0.5);
        double.evaluate(hidden2.neurons()).unwrap();
        double.back_propagate(&[1.0, 1.0], 0.1).unwrap();
        let after_two = hidden2.weights()[0].clone();

        let moved_one = after_one[1] - 0.5;
        let moved_two = after_two[1] - 0.5;
        assert!(moved_one > 0.0);
        // Two separate updates move it further than one.
        assert!(moved_two > moved_one * 1.5, "one reader: {moved_one}, two readers: {moved_two}");
    }
}
