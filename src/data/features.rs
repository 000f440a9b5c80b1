use serde::{Serialize, Deserialize};

/// Expands a raw 2D point into the feature vector the network is fed.
///
/// The same map is used to build training samples and to evaluate every
/// cell of the classification grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureMap {
    /// `[x, y]`
    Linear,
    /// `[x, y, x², y², x·y]`
    #[default]
    Quadratic,
}

impl FeatureMap {
    pub fn dim(&self) -> usize {
        match self {
            FeatureMap::Linear => 2,
            FeatureMap::Quadratic => 5,
        }
    }

    pub fn apply(&self, x: f64, y: f64) -> Vec<f64> {
        match self {
            FeatureMap::Linear => vec![x, y],
            FeatureMap::Quadratic => vec![x, y, x * x, y * y, x * y],
        }
    }
}
