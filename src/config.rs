use std::time::Duration;

use serde::{Serialize, Deserialize};

use crate::data::features::FeatureMap;
use crate::error::{PlaygroundError, Result};
use crate::network::spec::NetworkSpec;
use crate::train::slice_config::{SliceConfig, DEFAULT_SLICE_MS};

/// Settings for the playground and the headless demo.
///
/// Every field has a default, so a config file only needs to name what it
/// changes. The class count is the network's output size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Address the playground server binds to.
    pub addr: String,
    pub network: NetworkSpec,
    /// JSON file holding a `NetworkSpec`; replaces `network` when set.
    pub network_file: Option<String>,
    pub features: FeatureMap,
    /// Training budget per animation frame.
    pub time_slice_ms: u64,
    /// Width of one classification-grid cell in plane units.
    pub grid_step: f64,
    /// Side of the square canvas in pixels.
    pub canvas_px: u32,
    /// Seed for weight sampling; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        PlaygroundConfig {
            addr: "127.0.0.1:7878".to_owned(),
            network: NetworkSpec::default(),
            network_file: None,
            features: FeatureMap::default(),
            time_slice_ms: DEFAULT_SLICE_MS,
            grid_step: 0.05,
            canvas_px: 800,
            seed: None,
        }
    }
}

impl PlaygroundConfig {
    /// Deserializes a config from a JSON file and validates it.
    pub fn load_json(path: &str) -> Result<PlaygroundConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let mut config: PlaygroundConfig = serde_json::from_reader(reader)?;
        if let Some(spec_path) = &config.network_file {
            config.network = NetworkSpec::load_json(spec_path)?;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn classes(&self) -> usize {
        self.network.output_size()
    }

    pub fn slice(&self) -> SliceConfig {
        SliceConfig::new(Duration::from_millis(self.time_slice_ms))
    }

    /// Checks that the pieces fit together before anything is built.
    pub fn validate(&self) -> Result<()> {
        self.network.resolve()?;
        if self.features.dim() != self.network.input_size {
            return Err(PlaygroundError::config(format!(
                "feature map {:?} yields {} values but the network takes {}",
                self.features,
                self.features.dim(),
                self.network.input_size,
            )));
        }
        if self.canvas_px == 0 {
            return Err(PlaygroundError::config("canvas must be at least one pixel wide"));
        }
        // Cells smaller than a pixel cannot be drawn.
        let min_step = 2.0 / self.canvas_px as f64;
        if !(self.grid_step >= min_step && self.grid_step <= 2.0) {
            return Err(PlaygroundError::config(format!(
                "grid step must be in [{min_step}, 2] for a {} px canvas, got {}",
                self.canvas_px,
                self.grid_step,
            )));
        }
        Ok(())
    }
}
