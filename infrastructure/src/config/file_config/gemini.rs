//! Gemini configuration from TOML (`[gemini]` section)

use reasoner_application::GenerationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable consulted when no key is configured
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// API key (prefer the GEMINI_API_KEY environment variable)
    pub api_key: Option<String>,
    /// Model name, e.g. "gemini-1.5-flash"
    pub model: String,
    /// REST endpoint root
    pub base_url: String,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum tokens per completion
    pub max_output_tokens: u32,
    /// Transport timeout in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            api_key: None,
            model: params.model,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            temperature: params.temperature,
            max_output_tokens: params.max_output_tokens,
            timeout_seconds: params.timeout.map(|t| t.as_secs()),
        }
    }
}

impl FileGeminiConfig {
    pub fn to_generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
            .with_timeout(self.timeout_seconds.map(Duration::from_secs))
    }

    /// Resolve the API key: explicit flag, then config, then `GEMINI_API_KEY`.
    ///
    /// Blank values are skipped at every level.
    pub fn resolve_api_key(&self, flag: Option<&str>) -> Option<String> {
        Self::resolve_api_key_from(flag, self.api_key.as_deref(), || {
            std::env::var(API_KEY_ENV).ok()
        })
    }

    fn resolve_api_key_from(
        flag: Option<&str>,
        configured: Option<&str>,
        env: impl FnOnce() -> Option<String>,
    ) -> Option<String> {
        let non_blank = |s: &str| !s.trim().is_empty();

        flag.filter(|s| non_blank(s))
            .or(configured.filter(|s| non_blank(s)))
            .map(str::to_string)
            .or_else(|| env().filter(|s| non_blank(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generation_params() {
        let params = FileGeminiConfig::default().to_generation_params();
        assert_eq!(params, GenerationParams::default());
    }

    #[test]
    fn test_to_generation_params() {
        let config = FileGeminiConfig {
            model: "gemini-1.5-pro".to_string(),
            temperature: 0.7,
            max_output_tokens: 2048,
            timeout_seconds: None,
            ..Default::default()
        };
        let params = config.to_generation_params();
        assert_eq!(params.model, "gemini-1.5-pro");
        assert_eq!(params.max_output_tokens, 2048);
        assert!(params.timeout.is_none());
    }

    #[test]
    fn test_api_key_precedence() {
        let env = || Some("from-env".to_string());

        assert_eq!(
            FileGeminiConfig::resolve_api_key_from(Some("flag"), Some("config"), env),
            Some("flag".to_string())
        );
        assert_eq!(
            FileGeminiConfig::resolve_api_key_from(None, Some("config"), env),
            Some("config".to_string())
        );
        assert_eq!(
            FileGeminiConfig::resolve_api_key_from(None, None, env),
            Some("from-env".to_string())
        );
        assert_eq!(
            FileGeminiConfig::resolve_api_key_from(Some(" "), Some(""), env),
            Some("from-env".to_string())
        );
        assert_eq!(FileGeminiConfig::resolve_api_key_from(None, None, || None), None);
    }
}
