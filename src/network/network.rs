use log::debug;

use crate::data::sample::Sample;
use crate::error::{PlaygroundError, Result};
use crate::layers::{InnerLayer, InputLayer, Layer};
use crate::loss::SquaredError;
use crate::math::init::{StandardNormalSampler, WeightSampler};
use crate::math::vector::argmax;
use crate::network::spec::{LayerSpec, NetworkSpec};

/// An ordered stack of fully-connected layers trained one sample at a time.
#[derive(Debug)]
pub struct Network {
    spec: NetworkSpec,
    layers: Vec<InnerLayer>,
    last_output: Vec<f64>,
}

impl Network {
    /// Builds a network from `spec`, drawing every weight from `sampler`.
    pub fn new(spec: NetworkSpec, sampler: &mut dyn WeightSampler) -> Result<Network> {
        let layers = build_layers(&spec, sampler)?;
        debug!(
            "built network {} -> {}",
            spec.input_size,
            spec.layers.iter()
                .map(|l| format!("{} {}", l.size, l.activation.name()))
                .collect::<Vec<_>>()
                .join(" -> "),
        );
        Ok(Network { spec, layers, last_output: Vec::new() })
    }

    /// Builds a network with standard-normal weights from OS entropy.
    pub fn random(spec: NetworkSpec) -> Result<Network> {
        Network::new(spec, &mut StandardNormalSampler::new())
    }

    /// Assembles a network from layers built elsewhere. Each layer's
    /// declared arity must match the size of the layer before it.
    pub fn from_layers(input_size: usize, layers: Vec<InnerLayer>, learning_rate: f64) -> Result<Network> {
        let spec = NetworkSpec {
            input_size,
            layers: layers.iter()
                .map(|l| LayerSpec::new(l.size(), l.activation()).with_input_size(l.num_inputs()))
                .collect(),
            learning_rate,
        };
        spec.resolve()?;
        Ok(Network { spec, layers, last_output: Vec::new() })
    }

    pub fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    pub fn layers(&self) -> &[InnerLayer] {
        &self.layers
    }

    pub fn input_size(&self) -> usize {
        self.spec.input_size
    }

    pub fn output_size(&self) -> usize {
        self.spec.output_size()
    }

    pub fn learning_rate(&self) -> f64 {
        self.spec.learning_rate
    }

    /// Result of the most recent forward pass; empty before the first one.
    pub fn last_output(&self) -> &[f64] {
        &self.last_output
    }

    /// Every weight, indexed `[layer][neuron][weight]`, bias first.
    pub fn weights(&self) -> Vec<Vec<Vec<f64>>> {
        self.layers.iter().map(|l| l.weights()).collect()
    }

    /// Forward pass. Each layer reads the previous layer's neurons, so every
    /// neuron caches what it read for the backward pass.
    pub fn evaluate(&mut self, input: &InputLayer) -> Result<Vec<f64>> {
        if input.size() != self.spec.input_size {
            return Err(PlaygroundError::validation(format!(
                "network expects {} features, got {}",
                self.spec.input_size,
                input.size(),
            )));
        }

        let mut output = self.layers[0].evaluate(input.neurons())?;
        for i in 1..self.layers.len() {
            let (upstream, rest) = self.layers.split_at_mut(i);
            output = rest[0].evaluate(upstream[i - 1].neurons())?;
        }

        self.last_output = output.clone();
        Ok(output)
    }

    /// Evaluates a raw feature vector.
    pub fn predict(&mut self, features: &[f64]) -> Result<Vec<f64>> {
        self.evaluate(&InputLayer::new(features))
    }

    /// Index of the strongest output.
    pub fn classify(&mut self, features: &[f64]) -> Result<usize> {
        Ok(argmax(&self.predict(features)?))
    }

    /// One online training step on `sample`: forward pass, error signal
    /// `target - output`, then a single recursive backward pass from the
    /// last layer. Returns the sample's error before the update.
    pub fn train(&mut self, sample: &Sample) -> Result<f64> {
        if sample.target.len() != self.output_size() {
            return Err(PlaygroundError::validation(format!(
                "network produces {} outputs, target has {}",
                self.output_size(),
                sample.target.len(),
            )));
        }

        let output = self.predict(&sample.features)?;
        let error = SquaredError::loss(&output, &sample.target);
        let signal = SquaredError::signal(&output, &sample.target);

        let learning_rate = self.spec.learning_rate;
        if let Some(last) = self.layers.last_mut() {
            last.back_propagate(&signal, learning_rate)?;
        }
        Ok(error)
    }

    /// Discards every layer and rebuilds the same architecture with fresh
    /// weights.
    pub fn reset(&mut self, sampler: &mut dyn WeightSampler) -> Result<()> {
        self.layers = build_layers(&self.spec, sampler)?;
        self.last_output.clear();
        debug!("network reset with fresh weights");
        Ok(())
    }
}

fn build_layers(spec: &NetworkSpec, sampler: &mut dyn WeightSampler) -> Result<Vec<InnerLayer>> {
    Ok(spec.resolve()?
        .into_iter()
        .map(|(num_inputs, size, activation)| InnerLayer::new(num_inputs, size, activation, sampler))
        .collect())
}
