//! Gemini LLM Gateway implementation

use super::error::{GeminiError, Result};
use super::protocol::{GenerateContentRequest, parse_completion};
use async_trait::async_trait;
use reasoner_application::GenerationParams;
use reasoner_application::ports::llm_gateway::{GatewayError, LlmGateway};
use reqwest::Client;
use tracing::{debug, info};

/// Default Gemini REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// LLM Gateway implementation for the Gemini `generateContent` API
pub struct GeminiGateway {
    client: Client,
    api_key: String,
    base_url: String,
    params: GenerationParams,
}

impl GeminiGateway {
    /// Create a gateway; the request timeout comes from `params`
    pub fn new(api_key: impl Into<String>, params: GenerationParams) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("GeminiGateway initialized for model {}", params.model);

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            params,
        })
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// `{base_url}/models/{model}:generateContent`, without the key
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.params.model
        )
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let endpoint = self.endpoint();
        let request = GenerateContentRequest::new(prompt, &self.params);

        debug!("POST {} ({} prompt bytes)", endpoint, prompt.len());

        let response = self
            .client
            .post(&endpoint)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = parse_completion(&body)?;
        debug!("Gemini completion: {} bytes", text.len());
        Ok(text)
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn model(&self) -> &str {
        &self.params.model
    }

    async fn send(&self, prompt: &str) -> std::result::Result<String, GatewayError> {
        self.generate(prompt).await.map_err(GatewayError::from)
    }
}
