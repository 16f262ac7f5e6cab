//! Prompt domain
//!
//! Templates for the round-1 reasoning prompt and the round-2 follow-up prompt.

mod template;

pub use template::ReasoningPromptTemplate;
