use log::info;
use serde::{Deserialize, Serialize};

use ferrite_playground::{
    evaluate_samples, train_slice, LabeledPoint, Network, PlaygroundConfig, Result, SampleSet,
    StandardNormalSampler,
};

// ---------------------------------------------------------------------------
// Display mode
// ---------------------------------------------------------------------------

/// How grid cells are coloured. Only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Solid colour of the predicted class.
    Argmax,
    /// First three outputs mapped straight to red, green, blue.
    Gradient,
}

impl DisplayMode {
    pub fn toggled(self) -> DisplayMode {
        match self {
            DisplayMode::Argmax => DisplayMode::Gradient,
            DisplayMode::Gradient => DisplayMode::Argmax,
        }
    }
}

// ---------------------------------------------------------------------------
// Frame report
// ---------------------------------------------------------------------------

/// JSON answer to `POST /frame`.
///
/// Error and correct count describe the network *before* this frame's
/// training slice, i.e. the state the previous grid image showed.
#[derive(Debug, Clone, Serialize)]
pub struct FrameReport {
    pub error: f64,
    pub correct: usize,
    pub total: usize,
    pub sweeps: usize,
    pub mode: DisplayMode,
}

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

/// Everything the playground keeps between requests. Owned by the request
/// loop on the main thread; networks are not `Send`.
pub struct PlaygroundState {
    pub config: PlaygroundConfig,
    pub network: Network,
    pub samples: SampleSet,
    pub mode: DisplayMode,
    sampler: StandardNormalSampler,
}

impl PlaygroundState {
    pub fn new(config: PlaygroundConfig) -> Result<Self> {
        config.validate()?;
        let mut sampler = match config.seed {
            Some(seed) => StandardNormalSampler::seeded(seed),
            None => StandardNormalSampler::new(),
        };
        let network = Network::new(config.network.clone(), &mut sampler)?;
        let samples = SampleSet::new(config.features, config.classes());
        Ok(PlaygroundState { config, network, samples, mode: DisplayMode::Argmax, sampler })
    }

    pub fn add_point(&mut self, x: f64, y: f64, class: usize) -> Result<()> {
        self.samples.push(x, y, class)?;
        info!("point ({x:.3}, {y:.3}) class {class}, {} total", self.samples.len());
        Ok(())
    }

    pub fn undo(&mut self) -> Option<LabeledPoint> {
        let removed = self.samples.pop();
        if let Some(p) = removed {
            info!("removed point ({:.3}, {:.3}) class {}", p.x, p.y, p.class);
        }
        removed
    }

    /// Fresh weights, same architecture; collected points are kept.
    pub fn reset(&mut self) -> Result<()> {
        self.network.reset(&mut self.sampler)?;
        info!("network reset");
        Ok(())
    }

    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.mode = self.mode.toggled();
        info!("display mode: {:?}", self.mode);
        self.mode
    }

    /// Measures the current network, then spends one time slice training.
    pub fn frame(&mut self) -> Result<FrameReport> {
        let before = evaluate_samples(&mut self.network, self.samples.samples())?;
        let slice = train_slice(&mut self.network, self.samples.samples(), &self.config.slice())?;
        Ok(FrameReport {
            error: before.error,
            correct: before.correct,
            total: before.total,
            sweeps: slice.sweeps,
            mode: self.mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state() -> PlaygroundState {
        let config = PlaygroundConfig { seed: Some(3), time_slice_ms: 5, ..PlaygroundConfig::default() };
        PlaygroundState::new(config).unwrap()
    }

    #[test]
    fn toggle_flips_between_modes() {
        let mut state = seeded_state();
        assert_eq!(state.mode, DisplayMode::Argmax);
        assert_eq!(state.toggle_mode(), DisplayMode::Gradient);
        assert_eq!(state.toggle_mode(), DisplayMode::Argmax);
    }

    #[test]
    fn points_are_added_and_undone() {
        let mut state = seeded_state();
        state.add_point(0.1, 0.2, 0).unwrap();
        state.add_point(-0.3, 0.4, 2).unwrap();
        assert!(state.add_point(0.0, 0.0, 7).is_err());
        assert_eq!(state.samples.len(), 2);
        assert_eq!(state.undo().map(|p| p.class), Some(2));
        assert_eq!(state.samples.len(), 1);
    }

    #[test]
    fn reset_keeps_points_and_shape_but_not_weights() {
        let mut state = seeded_state();
        state.add_point(0.5, 0.5, 1).unwrap();
        let before = state.network.weights();
        state.reset().unwrap();
        let after = state.network.weights();
        assert_eq!(state.samples.len(), 1);
        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
    }

    #[test]
    fn frame_reports_pre_training_stats() {
        let mut state = seeded_state();
        let empty = state.frame().unwrap();
        assert_eq!((empty.total, empty.sweeps), (0, 0));

        state.add_point(0.5, 0.5, 1).unwrap();
        let report = state.frame().unwrap();
        assert_eq!(report.total, 1);
        assert!(report.sweeps >= 1);
        assert!(report.error > 0.0);
    }
}
