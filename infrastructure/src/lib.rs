//! Infrastructure layer for tool-reasoner
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileOutputConfig,
};
pub use gemini::{
    error::{GeminiError, Result},
    gateway::GeminiGateway,
};
pub use tools::{ToolRegistry, ToolRouter};
