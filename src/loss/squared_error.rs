pub struct SquaredError;

impl SquaredError {
    /// Scalar error: sum(½ (expected - predicted)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| 0.5 * (b - a).powi(2))
            .sum::<f64>()
    }

    /// Per-output error signal: expected - predicted.
    ///
    /// Positive means the output should have been larger; weights are moved
    /// along this signal (added, not subtracted).
    pub fn signal(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        crate::math::vector::subtract(expected, predicted)
    }
}
