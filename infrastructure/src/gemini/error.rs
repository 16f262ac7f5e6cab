//! Error types for the Gemini adapter

use reasoner_application::ports::llm_gateway::GatewayError;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to call Gemini API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Invalid JSON in Gemini response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Gemini response has no {0}")]
    MissingCompletion(&'static str),

    #[error("Gemini returned an empty completion")]
    EmptyCompletion,

    #[error("Gemini API key not found. Set GEMINI_API_KEY or pass --api-key")]
    MissingApiKey,
}

impl From<GeminiError> for GatewayError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(_) | GeminiError::Api { .. } => {
                GatewayError::Transport(err.to_string())
            }
            GeminiError::InvalidJson(_)
            | GeminiError::MissingCompletion(_)
            | GeminiError::EmptyCompletion => GatewayError::MalformedEnvelope(err.to_string()),
            GeminiError::MissingApiKey => GatewayError::Configuration(err.to_string()),
        }
    }
}
