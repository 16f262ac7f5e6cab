//! Gemini `generateContent` wire types
//!
//! # Example request
//! ```json
//! {
//!   "contents": [{ "parts": [{ "text": "..." }] }],
//!   "generationConfig": { "temperature": 0.1, "candidateCount": 1, "maxOutputTokens": 1000 }
//! }
//! ```
//!
//! The completion is read from `candidates[0].content.parts[0].text`.
//! Response types are lenient: every level is optional so that a truncated
//! envelope surfaces as [`GeminiError::MissingCompletion`] rather than a
//! JSON error.

use super::error::{GeminiError, Result};
use reasoner_application::GenerationParams;
use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub candidate_count: u32,
    pub max_output_tokens: u32,
}

impl GenerateContentRequest {
    /// Single-turn text request
    pub fn new(prompt: impl Into<String>, params: &GenerationParams) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.into(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                candidate_count: 1,
                max_output_tokens: params.max_output_tokens,
            },
        }
    }
}

/// Response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate
    pub fn completion_text(self) -> Result<String> {
        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or(GeminiError::MissingCompletion("candidates"))?;
        let content = candidate
            .content
            .ok_or(GeminiError::MissingCompletion("candidate content"))?;
        let text = content
            .parts
            .into_iter()
            .next()
            .ok_or(GeminiError::MissingCompletion("content parts"))?
            .text
            .ok_or(GeminiError::MissingCompletion("part text"))?;

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyCompletion);
        }
        Ok(text)
    }
}

/// Parse a raw response body into the completion text
pub fn parse_completion(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    response.completion_text()
}
