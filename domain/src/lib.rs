//! Domain layer for tool-reasoner
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Two-round reasoning
//!
//! A query is answered in at most two model round-trips:
//!
//! - **Round 1**: the model reasons in labelled sections and lists the tool
//!   calls it needs under `TOOLS_NEEDED:`
//! - **Round 2**: after the tools run, the model reconciles their output
//!   into a grounded `FINAL_ANSWER:`
//!
//! ## Tools
//!
//! Tools are a closed set of deterministic functions ([`ToolName`]). Model
//! text is parsed into [`ToolCall`]s by total parsers; anything unparseable
//! degrades to an empty value rather than an error.

pub mod config;
pub mod core;
pub mod prompt;
pub mod reasoning;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, query::Query};
pub use prompt::ReasoningPromptTemplate;
pub use reasoning::{
    AnswerSource, ReasoningFailure, ReasoningOutcome, ReasoningPhase, ReasoningReport,
    ReasoningResponse, ReasoningSections, has_reasoning_structure,
};
pub use tool::{
    batch::{KeyedToolResult, ToolBatchResults, result_keys},
    entities::{ParamType, ToolArgument, ToolCall, ToolDefinition, ToolName, ToolParameter},
    parser::{extract_tool_calls, parse_function_call, parse_tool_calls, parse_tools_from_response},
    value_objects::{StringAnalysis, ToolError, ToolErrorKind, ToolOutcome, ToolResult, ToolValue},
};
