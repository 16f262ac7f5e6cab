//! Tool router: the concrete implementation of [`ToolExecutorPort`].
//!
//! [`ToolRouter`] resolves each parsed call against the [`ToolRegistry`] and
//! runs it with isolated failure handling:
//!
//! ```text
//! ToolExecutorPort::execute(call)
//!   ├─ name not registered  → Failure(UnknownTool)
//!   ├─ arity / type / domain error → Failure(ExecutionError)
//!   └─ otherwise            → Success(value)
//! ```
//!
//! Batches run sequentially in input order via the port's default
//! `execute_all`, which also assigns result keys.

use super::registry::ToolRegistry;
use reasoner_application::ports::tool_executor::ToolExecutorPort;
use reasoner_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    value_objects::{ToolError, ToolResult},
};
use tracing::{debug, warn};

/// Executor that dispatches calls to the built-in tool functions
pub struct ToolRouter {
    registry: ToolRegistry,
}

impl ToolRouter {
    pub fn new() -> Self {
        Self {
            registry: ToolRegistry::new(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl Default for ToolRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolExecutorPort for ToolRouter {
    fn catalogue(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }

    fn execute(&self, call: &ToolCall) -> ToolResult {
        let Some(entry) = self.registry.resolve(call.name()) else {
            warn!("Unknown tool requested: {}", call.raw());
            return ToolResult::failure(call.clone(), ToolError::unknown_tool(call.name()));
        };

        match entry.invoke(call.arguments()) {
            Ok(value) => {
                debug!("{} -> {}", call, value);
                ToolResult::success(call.clone(), value)
            }
            Err(message) => {
                debug!("{} failed: {}", call, message);
                ToolResult::failure(call.clone(), ToolError::execution(message))
            }
        }
    }
}
