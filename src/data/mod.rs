pub mod features;
pub mod sample;

pub use features::FeatureMap;
pub use sample::{one_hot, LabeledPoint, Sample, SampleSet};
