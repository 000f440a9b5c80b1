use std::time::Duration;

/// Default wall-clock budget for one training slice.
pub const DEFAULT_SLICE_MS: u64 = 50;

/// Configuration for a `train_slice` run.
///
/// # Fields
/// - `budget`     — wall-clock time after which no further sweep is started.
///                  A sweep already in progress always runs to the end.
/// - `max_sweeps` — optional hard cap on sweeps per slice, mostly useful to
///                  make tests independent of machine speed.
#[derive(Debug, Clone)]
pub struct SliceConfig {
    pub budget: Duration,
    pub max_sweeps: Option<usize>,
}

impl SliceConfig {
    pub fn new(budget: Duration) -> Self {
        SliceConfig { budget, max_sweeps: None }
    }

    pub fn with_max_sweeps(mut self, max_sweeps: usize) -> Self {
        self.max_sweeps = Some(max_sweeps);
        self
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        SliceConfig::new(Duration::from_millis(DEFAULT_SLICE_MS))
    }
}
