//! Tool domain module
//!
//! Defines the closed set of deterministic tools the reasoning model may
//! request, how requests are parsed out of model text, and how results of a
//! batch are keyed for the follow-up prompt.
//!
//! ```text
//! ┌───────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │ TOOLS_NEEDED  │───▶│ ToolCall     │───▶│ ToolResult   │───▶│ ToolBatchResults │
//! │ (model text)  │    │ (parser)     │    │ (executor)   │    │ (keyed, ordered) │
//! └───────────────┘    └──────────────┘    └──────────────┘    └──────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolName`]: closed enum of the 8 tools; also the catalogue source
//! - [`ToolDefinition`]: name, parameters and description shown to the model
//! - [`ToolCall`]: a parsed invocation (name + literal arguments + raw text)
//! - [`ToolResult`]: exactly one of success value or [`ToolError`]
//! - [`ToolBatchResults`]: results keyed by [`result_keys`]
//!
//! # Architecture
//!
//! - **Domain** (this module): pure definitions and parsing, no I/O
//! - **Application** (`ToolExecutorPort`): port trait for execution
//! - **Infrastructure** (`ToolRouter`): the registry table and tool functions

pub mod batch;
pub mod entities;
pub mod parser;
pub mod value_objects;

pub use batch::{KeyedToolResult, ToolBatchResults, result_keys};
pub use entities::{ParamType, ToolArgument, ToolCall, ToolDefinition, ToolName, ToolParameter};
pub use parser::{extract_tool_calls, parse_function_call, parse_tool_calls, parse_tools_from_response};
pub use value_objects::{StringAnalysis, ToolError, ToolErrorKind, ToolOutcome, ToolResult, ToolValue};
