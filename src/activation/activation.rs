use serde::{Serialize, Deserialize};

/// Which rule a weighted neuron applies to its weighted sum.
///
/// This is also the "neuron variant" named in a `LayerSpec`: every neuron of
/// an inner layer shares one activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    ReLU,
}

impl Activation {
    /// Element-wise activation of the weighted sum `z`.
    pub fn function(&self, z: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-z).exp()),
            Activation::ReLU => if z > 0.0 { z } else { 0.0 },
        }
    }

    /// Derivative expressed through the cached output `a = function(z)`.
    ///
    /// Neurons only keep their last output, not `z`, so both rules are
    /// written in terms of `a`: `a (1 - a)` for the logistic curve, and the
    /// 0/1 "is active" gate for ReLU.
    pub fn derivative_from_output(&self, a: f64) -> f64 {
        match self {
            Activation::Sigmoid => a * (1.0 - a),
            Activation::ReLU => if a > 0.0 { 1.0 } else { 0.0 },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "sigmoid",
            Activation::ReLU => "relu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sigmoid_is_half_at_zero() {
        assert_relative_eq!(Activation::Sigmoid.function(0.0), 0.5);
        assert_relative_eq!(Activation::Sigmoid.derivative_from_output(0.5), 0.25);
    }

    #[test]
    fn relu_clamps_negative_sums() {
        assert_eq!(Activation::ReLU.function(-3.0), 0.0);
        assert_eq!(Activation::ReLU.function(2.5), 2.5);
        assert_eq!(Activation::ReLU.derivative_from_output(0.0), 0.0);
        assert_eq!(Activation::ReLU.derivative_from_output(2.5), 1.0);
    }

    #[test]
    fn serializes_by_variant_name() {
        let json = serde_json::to_string(&Activation::ReLU).unwrap();
        assert_eq!(json, "\"ReLU\"");
        let back: Activation = serde_json::from_str("\"Sigmoid\"").unwrap();
        assert_eq!(back, Activation::Sigmoid);
    }
}
