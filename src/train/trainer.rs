use crate::{
    data::sample::Sample,
    error::Result,
    network::network::Network,
};

/// One in-order pass over `samples`, one online update per sample.
/// Returns the mean pre-update error (0 for an empty slice).
pub fn sweep(network: &mut Network, samples: &[Sample]) -> Result<f64> {
    if samples.is_empty() {
        return Ok(0.0);
    }

    let mut total_error = 0.0;
    for sample in samples {
        total_error += network.train(sample)?;
    }

    Ok(total_error / samples.len() as f64)
}
