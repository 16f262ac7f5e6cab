//! Application layer for tool-reasoner
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ReasoningProgressNotifier},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::run_reasoning::{RunReasoningInput, RunReasoningUseCase};
