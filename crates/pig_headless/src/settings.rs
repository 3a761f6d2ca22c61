//! Run settings loaded from RON files.
//!
//! ```ron
//! (
//!     game: (winning_score: 100, games_per_match: 1000, start_policy: alternate),
//!     seed: Some(42),
//!     parallel: 8,
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pig_core::config::GameConfig;

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// File not found.
    #[error("Settings file not found: {0}")]
    FileNotFound(String),
    /// Failed to read file.
    #[error("Failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse RON.
    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] ron::error::SpannedError),
}

/// Everything a run needs besides the strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game rules and batch size.
    pub game: GameConfig,
    /// Base seed; `None` picks one from the clock.
    pub seed: Option<u64>,
    /// Worker threads for sweeps (0 = rayon default).
    pub parallel: u32,
}

impl Settings {
    /// Load settings from a RON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Load from a RON string.
    pub fn from_ron_str(ron: &str) -> Result<Self, SettingsError> {
        let settings: Settings = ron::from_str(ron)?;
        Ok(settings)
    }
}
