//! Reasoning domain
//!
//! Pure types for the two-round chain-of-thought protocol:
//!
//! - [`sections`]: total parser splitting model text into reasoning /
//!   tools-needed / final-answer
//! - [`response`]: one model round-trip ([`ReasoningResponse`])
//! - [`phase`]: protocol states ([`ReasoningPhase`]) and [`AnswerSource`]
//! - [`report`]: terminal result of a run ([`ReasoningOutcome`])
//!
//! The state machine itself is driven by the application layer's
//! `RunReasoningUseCase`; this module only defines what it produces.

pub mod phase;
pub mod report;
pub mod response;
pub mod sections;

pub use phase::{AnswerSource, ReasoningPhase};
pub use report::{ReasoningFailure, ReasoningOutcome, ReasoningReport};
pub use response::ReasoningResponse;
pub use sections::{ReasoningSections, has_reasoning_structure};
