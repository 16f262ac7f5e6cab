//! Result of a complete reasoning run

use super::phase::{AnswerSource, ReasoningPhase};
use crate::tool::batch::ToolBatchResults;
use serde::{Deserialize, Serialize};

/// Everything a successful run produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningReport {
    pub query: String,
    /// Round-1 reasoning section
    pub reasoning: String,
    /// Round-1 tools-needed section, verbatim
    pub tools_needed: String,
    /// True iff at least one tool call was parsed
    pub tools_used: bool,
    pub tool_results: ToolBatchResults,
    pub final_answer: String,
    pub answer_source: AnswerSource,
    pub raw_first_response: String,
    /// Phases visited, in order
    pub phases: Vec<ReasoningPhase>,
}

impl ReasoningReport {
    /// `(key, value-or-error)` lines for display
    pub fn tool_result_lines(&self) -> Vec<(String, String)> {
        self.tool_results.display_pairs()
    }
}

/// A run that ended in `Failed`; no partial results are exposed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningFailure {
    pub query: String,
    pub error: String,
    pub phases: Vec<ReasoningPhase>,
}

/// Terminal result of the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReasoningOutcome {
    Completed(ReasoningReport),
    Failed(ReasoningFailure),
}

impl ReasoningOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ReasoningOutcome::Completed(_))
    }

    pub fn query(&self) -> &str {
        match self {
            ReasoningOutcome::Completed(report) => &report.query,
            ReasoningOutcome::Failed(failure) => &failure.query,
        }
    }

    pub fn report(&self) -> Option<&ReasoningReport> {
        match self {
            ReasoningOutcome::Completed(report) => Some(report),
            ReasoningOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ReasoningOutcome::Completed(_) => None,
            ReasoningOutcome::Failed(failure) => Some(&failure.error),
        }
    }

    pub fn phases(&self) -> &[ReasoningPhase] {
        match self {
            ReasoningOutcome::Completed(report) => &report.phases,
            ReasoningOutcome::Failed(failure) => &failure.phases,
        }
    }

    /// The phase the run ended in
    pub fn final_phase(&self) -> ReasoningPhase {
        match self {
            ReasoningOutcome::Completed(_) => ReasoningPhase::Done,
            ReasoningOutcome::Failed(_) => ReasoningPhase::Failed,
        }
    }
}
