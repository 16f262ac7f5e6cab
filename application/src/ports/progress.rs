//! Progress notification port
//!
//! Defines the interface for reporting progress during a reasoning run.

use reasoner_domain::{ReasoningPhase, ReasoningSections, ToolResult};

/// Callback for progress updates during a reasoning run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (plain log lines, spinners, etc.)
pub trait ReasoningProgressNotifier: Send + Sync {
    /// Called right before a model request; `phase` is the phase the
    /// request leads to (`RequestedInitialReasoning` or `RequestedFollowUp`)
    fn on_request_start(&self, phase: ReasoningPhase);

    /// Called on every phase transition, including the terminal one
    fn on_phase_enter(&self, phase: ReasoningPhase);

    /// Called with the parsed round-1 sections
    fn on_initial_sections(&self, _sections: &ReasoningSections) {}

    /// Called once per executed tool call, in batch order
    fn on_tool_result(&self, _key: &str, _result: &ToolResult) {}

    /// Called when the follow-up round fails and the round-1 answer is kept
    fn on_follow_up_failed(&self, _error: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ReasoningProgressNotifier for NoProgress {
    fn on_request_start(&self, _phase: ReasoningPhase) {}
    fn on_phase_enter(&self, _phase: ReasoningPhase) {}
}
