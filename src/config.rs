//! Animator configuration
//!
//! Loaded from YAML; every field has a default so partial files are fine.

use crate::algo::ShortestPathOptions;
use crate::graph::{Bounds, RandomGraphConfig};
use crate::render::Palette;
use crate::scheduler::StepDelay;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Static settings of an animator session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Initial pause between two visual events
    pub step_delay_ms: u64,
    /// Radius of a drawn vertex, also used for hit-testing
    pub vertex_radius: f64,
    /// Drawable canvas area
    pub canvas: Bounds,
    pub random: RandomGraphConfig,
    pub palette: Palette,
    pub shortest_path: ShortestPathOptions,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: 500,
            vertex_radius: 40.0,
            canvas: Bounds::default(),
            random: RandomGraphConfig::default(),
            palette: Palette::default(),
            shortest_path: ShortestPathOptions::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: AnimatorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.vertex_radius.is_nan() || self.vertex_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "vertex_radius must be positive, got {}",
                self.vertex_radius
            )));
        }
        if self.canvas.width <= 0.0 || self.canvas.height <= 0.0 {
            return Err(ConfigError::Invalid("canvas must have a positive size".to_string()));
        }
        if self.random.min_vertices > self.random.max_vertices {
            return Err(ConfigError::Invalid(format!(
                "random.min_vertices ({}) exceeds random.max_vertices ({})",
                self.random.min_vertices, self.random.max_vertices
            )));
        }
        if i64::try_from(self.random.max_weight).is_err() {
            return Err(ConfigError::Invalid(format!(
                "random.max_weight must not exceed {}, got {}",
                i64::MAX,
                self.random.max_weight
            )));
        }
        Ok(())
    }

    pub fn step_delay(&self) -> StepDelay {
        StepDelay::new(Duration::from_millis(self.step_delay_ms))
    }

    /// Random graph settings placed on this config's canvas
    pub fn random_graph(&self) -> RandomGraphConfig {
        RandomGraphConfig {
            bounds: self.canvas,
            radius: self.vertex_radius,
            ..self.random.clone()
        }
    }
}
