//! Tool Executor port
//!
//! Defines the interface for executing parsed tool calls.

use reasoner_domain::tool::{
    batch::ToolBatchResults,
    entities::{ToolCall, ToolDefinition},
    value_objects::ToolResult,
};

/// Port for tool execution
///
/// Tools are pure and CPU-only, so execution is synchronous. A failing call
/// is reported through its [`ToolResult`]; it never aborts the batch.
/// Implementations (adapters) live in the infrastructure layer.
pub trait ToolExecutorPort: Send + Sync {
    /// Catalogue of available tools, in display order
    fn catalogue(&self) -> Vec<ToolDefinition>;

    /// Execute a single call
    fn execute(&self, call: &ToolCall) -> ToolResult;

    /// Execute calls sequentially in input order and key the results
    fn execute_all(&self, calls: &[ToolCall]) -> ToolBatchResults {
        let results = calls.iter().map(|call| self.execute(call)).collect();
        ToolBatchResults::from_batch(calls, results)
    }
}
