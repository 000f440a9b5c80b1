use serde::{Serialize, Deserialize};

use crate::activation::Activation;
use crate::error::{PlaygroundError, Result};

pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

/// Describes one inner layer in a network specification.
///
/// Fields:
/// - `size`       — number of neurons in this layer
/// - `activation` — the neuron variant every neuron of the layer uses
/// - `input_size` — optional declared arity; when present it must equal the
///                  previous layer's size (or the network input size for the
///                  first layer). When absent it is derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: Activation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_size: Option<usize>,
}

impl LayerSpec {
    pub fn new(size: usize, activation: Activation) -> LayerSpec {
        LayerSpec { size, activation, input_size: None }
    }

    pub fn with_input_size(mut self, input_size: usize) -> LayerSpec {
        self.input_size = Some(input_size);
        self
    }
}

/// A serializable description of a network architecture plus the learning
/// rate it trains with. Weights are never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Length of the feature vectors fed to the first layer.
    pub input_size: usize,
    /// Ordered list of inner layers (input → output).
    pub layers: Vec<LayerSpec>,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

impl NetworkSpec {
    /// Builds a spec from `(size, activation)` pairs with derived arities.
    pub fn new(input_size: usize, layers: &[(usize, Activation)]) -> NetworkSpec {
        NetworkSpec {
            input_size,
            layers: layers.iter().map(|&(size, activation)| LayerSpec::new(size, activation)).collect(),
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> NetworkSpec {
        self.learning_rate = learning_rate;
        self
    }

    /// Size of the last layer; 0 for a spec without layers.
    pub fn output_size(&self) -> usize {
        self.layers.last().map(|l| l.size).unwrap_or(0)
    }

    /// Checks the spec and returns `(num_inputs, size, activation)` for each
    /// layer in order.
    pub fn resolve(&self) -> Result<Vec<(usize, usize, Activation)>> {
        if self.input_size == 0 {
            return Err(PlaygroundError::config("network input size must be at least 1"));
        }
        if self.layers.is_empty() {
            return Err(PlaygroundError::config("network needs at least one layer"));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PlaygroundError::config(format!(
                "learning rate must be a positive number, got {}",
                self.learning_rate,
            )));
        }

        let mut previous = self.input_size;
        let mut resolved = Vec::with_capacity(self.layers.len());
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.size == 0 {
                return Err(PlaygroundError::config(format!("layer {i} has no neurons")));
            }
            if let Some(declared) = layer.input_size {
                if declared != previous {
                    return Err(PlaygroundError::config(format!(
                        "layer {i} declares {declared} inputs but the layer before it produces {previous}",
                    )));
                }
            }
            resolved.push((previous, layer.size, layer.activation));
            previous = layer.size;
        }
        Ok(resolved)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for NetworkSpec {
    /// Five quadratic features, 30 hidden sigmoids, three sigmoid outputs.
    fn default() -> Self {
        NetworkSpec::new(5, &[(30, Activation::Sigmoid), (3, Activation::Sigmoid)])
    }
}
