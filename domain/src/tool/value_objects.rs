//! Tool domain value objects: immutable result and error types
//!
//! Every execution produces a [`ToolResult`] holding exactly one
//! [`ToolOutcome`]: a [`ToolValue`] on success or a [`ToolError`] on failure.
//! Failures are data, never panics, so one bad call cannot abort a batch.

use super::entities::ToolCall;
use crate::util::format_float;
use serde::{Deserialize, Serialize};

/// Character statistics produced by `analyze_string`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringAnalysis {
    pub total_chars: usize,
    pub letters: usize,
    pub vowels: usize,
    pub consonants: usize,
    pub words: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub spaces: usize,
    pub punctuation: usize,
}

impl StringAnalysis {
    /// Field name / count pairs, in report order
    pub fn entries(&self) -> [(&'static str, usize); 10] {
        [
            ("total_chars", self.total_chars),
            ("letters", self.letters),
            ("vowels", self.vowels),
            ("consonants", self.consonants),
            ("words", self.words),
            ("uppercase", self.uppercase),
            ("lowercase", self.lowercase),
            ("digits", self.digits),
            ("spaces", self.spaces),
            ("punctuation", self.punctuation),
        ]
    }
}

impl std::fmt::Display for StringAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .entries()
            .iter()
            .map(|(name, count)| format!("'{}': {}", name, count))
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

/// Value returned by a successful tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Analysis(StringAnalysis),
}

impl ToolValue {
    /// Numeric view of the value, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ToolValue::Integer(n) => Some(*n as f64),
            ToolValue::Float(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for ToolValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolValue::Integer(n) => write!(f, "{}", n),
            ToolValue::Float(n) => write!(f, "{}", format_float(*n)),
            ToolValue::Boolean(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            ToolValue::Analysis(analysis) => write!(f, "{}", analysis),
        }
    }
}

/// Failure category of a tool call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    /// The name does not resolve to a registered tool
    UnknownTool,
    /// Wrong arity, wrong argument type, or a domain error raised by the tool
    ExecutionError,
}

impl ToolErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolErrorKind::UnknownTool => "unknown_tool",
            ToolErrorKind::ExecutionError => "execution_error",
        }
    }
}

/// Error that occurred while resolving or running a tool call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
}

impl ToolError {
    pub fn unknown_tool(name: impl AsRef<str>) -> Self {
        Self {
            kind: ToolErrorKind::UnknownTool,
            message: format!("Unknown function: {}", name.as_ref()),
        }
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self {
            kind: ToolErrorKind::ExecutionError,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ToolErrorKind::UnknownTool => write!(f, "{}", self.message),
            ToolErrorKind::ExecutionError => write!(f, "Execution error: {}", self.message),
        }
    }
}

impl std::error::Error for ToolError {}

/// Outcome of one tool execution; exactly one variant ever holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolOutcome {
    Success(ToolValue),
    Failure(ToolError),
}

/// Result of executing a [`ToolCall`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    call: ToolCall,
    outcome: ToolOutcome,
}

impl ToolResult {
    pub fn success(call: ToolCall, value: ToolValue) -> Self {
        Self {
            call,
            outcome: ToolOutcome::Success(value),
        }
    }

    pub fn failure(call: ToolCall, error: ToolError) -> Self {
        Self {
            call,
            outcome: ToolOutcome::Failure(error),
        }
    }

    pub fn call(&self) -> &ToolCall {
        &self.call
    }

    pub fn outcome(&self) -> &ToolOutcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ToolOutcome::Success(_))
    }

    pub fn value(&self) -> Option<&ToolValue> {
        match &self.outcome {
            ToolOutcome::Success(value) => Some(value),
            ToolOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ToolError> {
        match &self.outcome {
            ToolOutcome::Success(_) => None,
            ToolOutcome::Failure(error) => Some(error),
        }
    }

    /// The value as text, or `Error: <message>` for failures.
    ///
    /// This is the exact string substituted into the follow-up prompt.
    pub fn display_value(&self) -> String {
        match &self.outcome {
            ToolOutcome::Success(value) => value.to_string(),
            ToolOutcome::Failure(error) => format!("Error: {}", error),
        }
    }
}
