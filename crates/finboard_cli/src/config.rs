//! CLI configuration management.
//!
//! Handles loading of `finboard.toml` with environment variable override
//! support. Command-line flags take precedence over both.

use std::path::Path;

use finboard_core::types::Date;
use finboard_series::preset::DateRangePreset;
use finboard_series::tabs::UserTab;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::output::OutputFormat;

/// finboard configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FinboardConfig {
    /// Base seed for the user tab streams; fresh entropy when absent
    pub seed: Option<u64>,

    /// Default user tab (`user1` to `user5`)
    pub user: String,

    /// Default date-range preset
    pub preset: String,

    /// Start of the custom range
    pub start: Option<Date>,

    /// End of the custom range
    pub end: Option<Date>,

    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Output format (`table` or `json`)
    pub format: String,

    /// Environment overrides that could not be applied
    #[serde(skip)]
    pub rejected_env: Vec<String>,
}

impl Default for FinboardConfig {
    fn default() -> Self {
        Self {
            seed: None,
            user: UserTab::default().id(),
            preset: DateRangePreset::default().name().to_string(),
            start: None,
            end: None,
            log_level: "info".to_string(),
            format: OutputFormat::default().name().to_string(),
            rejected_env: Vec::new(),
        }
    }
}

impl FinboardConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("FINBOARD_SEED") {
            match seed.trim().parse() {
                Ok(parsed) => self.seed = Some(parsed),
                Err(_) => {
                    warn!(value = %seed, "ignoring unparseable FINBOARD_SEED");
                    self.rejected_env
                        .push(format!("FINBOARD_SEED '{}' is not an unsigned integer", seed));
                }
            }
        }

        if let Ok(user) = std::env::var("FINBOARD_USER") {
            self.user = user;
        }

        if let Ok(preset) = std::env::var("FINBOARD_PRESET") {
            self.preset = preset;
        }

        if let Ok(log_level) = std::env::var("FINBOARD_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(format) = std::env::var("FINBOARD_FORMAT") {
            self.format = format;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = self.rejected_env.clone();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if let Err(e) = self.user.parse::<UserTab>() {
            errors.push(format!("Invalid user: {}", e));
        }

        match self.preset.parse::<DateRangePreset>() {
            Ok(DateRangePreset::Custom) if self.start.is_none() || self.end.is_none() => {
                errors.push("Custom preset requires both start and end".to_string());
            }
            Ok(_) => {}
            Err(e) => errors.push(format!("Invalid preset: {}", e)),
        }

        if let Err(e) = self.format.parse::<OutputFormat>() {
            errors.push(format!("Invalid format: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
