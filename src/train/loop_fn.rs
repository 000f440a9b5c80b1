use std::time::Instant;

use log::trace;

use crate::data::sample::Sample;
use crate::error::Result;
use crate::loss::SquaredError;
use crate::math::vector::argmax;
use crate::network::network::Network;
use crate::train::slice_config::SliceConfig;
use crate::train::stats::{EvalStats, SliceStats};
use crate::train::trainer::sweep;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs full sweeps over `samples` until `config.budget` has elapsed.
///
/// The clock is only checked between sweeps: a sweep that starts before the
/// deadline always finishes, so a slice may overrun its budget by up to one
/// sweep. How many sweeps fit is machine dependent. With no samples the call
/// returns at once.
pub fn train_slice(network: &mut Network, samples: &[Sample], config: &SliceConfig) -> Result<SliceStats> {
    let start = Instant::now();
    let mut stats = SliceStats::default();

    if samples.is_empty() {
        return Ok(stats);
    }

    while start.elapsed() < config.budget {
        if let Some(cap) = config.max_sweeps {
            if stats.sweeps >= cap {
                break;
            }
        }

        stats.last_sweep_error = Some(sweep(network, samples)?);
        stats.sweeps += 1;
        stats.samples_trained += samples.len();
    }

    stats.elapsed_ms = start.elapsed().as_millis() as u64;
    trace!(
        "slice: {} sweeps over {} samples in {} ms",
        stats.sweeps,
        samples.len(),
        stats.elapsed_ms,
    );
    Ok(stats)
}

/// Summed error and argmax accuracy of `network` over `samples`.
pub fn evaluate_samples(network: &mut Network, samples: &[Sample]) -> Result<EvalStats> {
    let mut stats = EvalStats { total: samples.len(), ..EvalStats::default() };

    for sample in samples {
        let output = network.predict(&sample.features)?;
        stats.error += SquaredError::loss(&output, &sample.target);
        if argmax(&output) == argmax(&sample.target) {
            stats.correct += 1;
        }
    }

    Ok(stats)
}
