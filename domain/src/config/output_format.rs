//! Output format value object

use serde::{Deserialize, Serialize};

/// How a reasoning report is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Query, reasoning, tools used and final answer (default)
    #[default]
    Full,
    /// Only the final answer
    Answer,
    /// JSON document of the whole outcome
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Full => "full",
            OutputFormat::Answer => "answer",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(OutputFormat::Full),
            "answer" => Ok(OutputFormat::Answer),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{}' (expected full, answer or json)",
                other
            )),
        }
    }
}
