use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Source of initial weights for freshly built (or reset) neurons.
///
/// Every weight, bias included, is one independent `sample()` call. Any
/// `FnMut() -> f64` closure is a sampler, which is handy for tests that
/// need known weights.
pub trait WeightSampler {
    fn sample(&mut self) -> f64;
}

impl<F: FnMut() -> f64> WeightSampler for F {
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Draws weights from N(0, 1).
pub struct StandardNormalSampler {
    rng: StdRng,
}

impl StandardNormalSampler {
    /// Seeded from OS entropy; every instance produces different weights.
    pub fn new() -> Self {
        StandardNormalSampler { rng: StdRng::from_entropy() }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        StandardNormalSampler { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for StandardNormalSampler {
    fn default() -> Self {
        StandardNormalSampler::new()
    }
}

impl WeightSampler for StandardNormalSampler {
    fn sample(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_samplers_repeat() {
        let mut a = StandardNormalSampler::seeded(7);
        let mut b = StandardNormalSampler::seeded(7);
        for _ in 0..16 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn standard_normal_has_roughly_zero_mean_unit_variance() {
        let mut s = StandardNormalSampler::seeded(42);
        let n = 20_000;
        let xs: Vec<f64> = (0..n).map(|_| s.sample()).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean = {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance = {var}");
    }

    #[test]
    fn closures_are_samplers() {
        let mut next = 0.0;
        let mut counting = || { next += 1.0; next };
        assert_eq!(counting.sample(), 1.0);
        assert_eq!(counting.sample(), 2.0);
    }
}
