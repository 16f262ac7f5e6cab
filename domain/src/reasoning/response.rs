//! Per-round model response

use super::sections::ReasoningSections;
use serde::{Deserialize, Serialize};

/// One round-trip with the model, parsed into sections.
///
/// When `success` is false, `error` is set and the sections are empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningResponse {
    pub success: bool,
    pub sections: ReasoningSections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub raw_text: String,
}

impl ReasoningResponse {
    /// Parse a completion returned by the model
    pub fn from_completion(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        Self {
            success: true,
            sections: ReasoningSections::parse(&raw_text),
            error: None,
            raw_text,
        }
    }

    /// A round that never produced a completion
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            sections: ReasoningSections::default(),
            error: Some(error.into()),
            raw_text: String::new(),
        }
    }

    pub fn reasoning(&self) -> &str {
        &self.sections.reasoning
    }

    pub fn tools_needed(&self) -> &str {
        &self.sections.tools_needed
    }

    pub fn final_answer(&self) -> &str {
        &self.sections.final_answer
    }
}
