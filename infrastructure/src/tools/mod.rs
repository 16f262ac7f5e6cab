//! Built-in tool implementations
//!
//! The tool functions are pure and synchronous:
//! - `math`: averages, square roots, comparisons and the calculator
//! - `text`: letter, vowel and consonant counting plus string analysis
//! - `expression`: the restricted arithmetic evaluator behind `basic_calculator`
//!
//! [`ToolRegistry`] maps each [`ToolName`](reasoner_domain::ToolName) to its
//! handler and [`ToolRouter`] exposes the registry through the application's
//! `ToolExecutorPort`.

pub mod expression;
pub mod math;
pub mod text;

mod registry;
mod router;

pub use registry::{ToolEntry, ToolHandler, ToolRegistry};
pub use router::ToolRouter;
