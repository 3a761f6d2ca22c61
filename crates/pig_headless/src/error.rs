//! Errors surfaced by the headless runner.

use thiserror::Error;

use pig_core::error::PigError;

use crate::settings::SettingsError;

/// Anything that stops a headless run.
#[derive(Error, Debug)]
pub enum HeadlessError {
    /// Invalid strategy, range or game configuration.
    #[error(transparent)]
    Simulation(#[from] PigError),
    /// Settings file could not be used.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Worker pool could not be built.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Report could not be written or read.
    #[error("Report IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// Report could not be encoded or decoded.
    #[error("Report JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl HeadlessError {
    /// Whether the run was rejected because of bad user input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Simulation(_) | Self::Settings(_))
    }
}
