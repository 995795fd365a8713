//! Runtime settings and configuration loading
//!
//! Settings are plain JSON. Missing fields fall back to defaults, so a file
//! only needs to mention what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON or wrong field types
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but unusable values
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed (None = derive from the wall clock)
    pub seed: Option<u64>,
    /// Largest `dt` fed to a single tick (frame spike guard)
    pub max_frame_dt: f32,
    /// Draw score and health
    pub show_hud: bool,
    /// Demo mode: the autopilot flies instead of the keyboard
    pub idle_mode: bool,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_frame_dt: 0.1,
            show_hud: true,
            idle_mode: false,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_frame_dt > 0.0) {
            return Err(ConfigError::Invalid(
                "max_frame_dt must be positive".to_string(),
            ));
        }
        self.tuning.validate()
    }

    /// Seed to start a run with
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Clamp a host-supplied frame time into `[0, max_frame_dt]`
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_frame_dt)
    }
}
