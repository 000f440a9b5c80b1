use serde::{Serialize, Deserialize};

/// What one `train_slice` call did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SliceStats {
    /// Full passes over the sample set completed in this slice.
    pub sweeps: usize,
    /// Individual `train` calls, i.e. `sweeps * samples`.
    pub samples_trained: usize,
    /// Wall-clock duration of the slice in milliseconds.
    pub elapsed_ms: u64,
    /// Mean pre-update error of the last sweep; `None` if no sweep ran.
    pub last_sweep_error: Option<f64>,
}

/// Error and accuracy of a network over a sample set, without training.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvalStats {
    /// Sum over samples of `Σ ½ (target - output)²`.
    pub error: f64,
    /// Samples whose strongest output matches the strongest target.
    pub correct: usize,
    pub total: usize,
}

impl EvalStats {
    /// Fraction in [0, 1]; 0 for an empty set.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}
