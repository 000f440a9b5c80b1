pub mod init;
pub mod vector;

pub use init::{StandardNormalSampler, WeightSampler};
pub use vector::argmax;
