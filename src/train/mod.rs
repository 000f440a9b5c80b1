pub mod trainer;
pub mod stats;
pub mod slice_config;
pub mod loop_fn;

pub use trainer::sweep;
pub use stats::{EvalStats, SliceStats};
pub use slice_config::SliceConfig;
pub use loop_fn::{evaluate_samples, train_slice};
