//! Error types for the finboard CLI.

use finboard_core::types::DateError;
use finboard_series::error::{GeneratorError, PresetError, UnknownTab};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Series generation error
    #[error("Generation error: {0}")]
    Generator(#[from] GeneratorError),

    /// Date-range selection error
    #[error("Date range error: {0}")]
    Preset(#[from] PresetError),

    /// Unknown user tab
    #[error(transparent)]
    Tab(#[from] UnknownTab),

    /// Date parsing or arithmetic error
    #[error("Date error: {0}")]
    Date(#[from] DateError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Self-check failure
    #[error("Check failed: {0}")]
    Check(String),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
