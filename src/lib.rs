pub mod activation;
pub mod config;
pub mod data;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod neuron;
pub mod train;

// Convenience re-exports
pub use activation::activation::Activation;
pub use config::PlaygroundConfig;
pub use data::{FeatureMap, LabeledPoint, Sample, SampleSet};
pub use error::{PlaygroundError, Result};
pub use layers::{InnerLayer, InputLayer, Layer};
pub use math::init::{StandardNormalSampler, WeightSampler};
pub use network::network::Network;
pub use network::spec::{LayerSpec, NetworkSpec};
pub use neuron::{Neuron, NeuronRef};
pub use train::{evaluate_samples, sweep, train_slice, EvalStats, SliceConfig, SliceStats};
