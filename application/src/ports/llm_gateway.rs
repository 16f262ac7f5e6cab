//! LLM Gateway port
//!
//! Defines the interface for communicating with the reasoning model.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// Every variant is fatal for the round that produced it; the orchestrator
/// never retries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Network failure, timeout, or non-success HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered but the completion text could not be extracted
    #[error("Malformed API response: {0}")]
    MalformedEnvelope(String),

    /// The gateway cannot be used as configured (e.g. missing API key)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Gateway for LLM communication
///
/// One prompt in, one completion out. The completion is returned verbatim
/// and is never empty on success.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Name of the model requests are sent to
    fn model(&self) -> &str;

    /// Send a prompt and wait for the completion text
    async fn send(&self, prompt: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GatewayError::Transport("Gemini API error 500: boom".to_string());
        assert_eq!(err.to_string(), "Transport error: Gemini API error 500: boom");

        let err = GatewayError::MalformedEnvelope("no candidates".to_string());
        assert_eq!(err.to_string(), "Malformed API response: no candidates");
    }
}
