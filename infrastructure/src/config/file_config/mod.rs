//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;

pub use gemini::{API_KEY_ENV, FileGeminiConfig};
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during configuration validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gemini.temperature must be between 0.0 and 2.0, got {0}")]
    TemperatureOutOfRange(f32),

    #[error("gemini.max_output_tokens cannot be 0")]
    ZeroMaxOutputTokens,

    #[error("gemini.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    /// Model endpoint and generation settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let gemini = &self.gemini;

        if gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if gemini.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = gemini.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if !(0.0..=2.0).contains(&gemini.temperature) {
            return Err(ConfigValidationError::TemperatureOutOfRange(
                gemini.temperature,
            ));
        }

        if gemini.max_output_tokens == 0 {
            return Err(ConfigValidationError::ZeroMaxOutputTokens);
        }

        Ok(())
    }
}
