//! Generation parameters: per-request model settings.
//!
//! [`GenerationParams`] groups what the gateway sends alongside every prompt.
//! These are application-layer concerns, not domain policy: the two-round
//! protocol is identical whatever model or temperature is used.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model and sampling parameters for reasoning requests.
///
/// Low temperature keeps the three-section format and tool-call syntax
/// stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Model identifier, e.g. `gemini-1.5-flash`
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Upper bound on completion length
    pub max_output_tokens: u32,
    /// Per-request transport timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            temperature: 0.1,
            max_output_tokens: 1000,
            timeout: Some(Duration::from_secs(60)),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
