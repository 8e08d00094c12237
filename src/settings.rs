//! Runner settings and preferences
//!
//! Read from a JSON file next to the binary. Anything missing or unreadable
//! falls back to the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the native runner drives the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Autopilot RNG seed
    pub seed: u64,
    /// Chance per decision that the autopilot picks a random direction
    pub wander: f64,
    /// Send the quit signal after this many ticks (None = run to the end)
    pub max_ticks: Option<u64>,
    /// Sleep between ticks to hold the real tick rate
    pub realtime: bool,
    /// Log a progress line every this many ticks (0 = never)
    pub report_every: u32,
    /// Optional tuning JSON overriding the built-in timing
    pub tuning_path: Option<PathBuf>,
    /// Optional campaign JSON replacing the built-in levels
    pub layouts_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            wander: 0.35,
            max_ticks: Some(60 * 60 * 10),
            realtime: false,
            report_every: 600,
            tuning_path: None,
            layouts_path: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path)
            .map_err(ConfigError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}
