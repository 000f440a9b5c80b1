pub mod neuron;

pub use neuron::{Neuron, NeuronRef, WeightedNeuron};
