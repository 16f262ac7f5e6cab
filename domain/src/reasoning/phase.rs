//! Orchestration phases of a reasoning run

use serde::{Deserialize, Serialize};

/// State of the two-round reasoning protocol.
///
/// ```text
/// Start ─▶ RequestedInitialReasoning ─▶ ToolsExecuted ─▶ RequestedFollowUp ─▶ Done
///   │                 │                       │                                  ▲
///   └──▶ Failed ◀─────┘                       └──────────────────────────────────┘
/// ```
///
/// `ToolsExecuted` and `RequestedFollowUp` are skipped when no tools were
/// requested or none succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningPhase {
    Start,
    RequestedInitialReasoning,
    ToolsExecuted,
    RequestedFollowUp,
    Done,
    Failed,
}

impl ReasoningPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningPhase::Start => "start",
            ReasoningPhase::RequestedInitialReasoning => "requested_initial_reasoning",
            ReasoningPhase::ToolsExecuted => "tools_executed",
            ReasoningPhase::RequestedFollowUp => "requested_follow_up",
            ReasoningPhase::Done => "done",
            ReasoningPhase::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ReasoningPhase::Done | ReasoningPhase::Failed)
    }

    /// Whether the protocol allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: ReasoningPhase) -> bool {
        use ReasoningPhase::*;
        matches!(
            (self, next),
            (Start, RequestedInitialReasoning)
                | (Start, Failed)
                | (RequestedInitialReasoning, ToolsExecuted)
                | (RequestedInitialReasoning, Done)
                | (ToolsExecuted, RequestedFollowUp)
                | (ToolsExecuted, Done)
                | (RequestedFollowUp, Done)
        )
    }
}

impl std::fmt::Display for ReasoningPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which round produced the final answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// No tool succeeded; the first answer stands
    InitialRound,
    /// The follow-up round reconciled tool output into the answer
    FollowUpRound,
    /// The follow-up round failed; the first answer was kept
    InitialRoundFallback,
}

impl AnswerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::InitialRound => "initial_round",
            AnswerSource::FollowUpRound => "follow_up_round",
            AnswerSource::InitialRoundFallback => "initial_round_fallback",
        }
    }
}
