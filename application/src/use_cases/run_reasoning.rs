//! Run Reasoning use case
//!
//! Drives the two-round tool-augmented reasoning protocol:
//!
//! 1. Send the query with the tool catalogue and parse the three sections
//! 2. Parse `TOOLS_NEEDED` into calls and execute them as one batch
//! 3. If any call succeeded, send a follow-up prompt embedding the keyed
//!    results and take round 2's `FINAL_ANSWER`
//!
//! Only a failed round-1 request is fatal. A failed follow-up keeps the
//! round-1 answer.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoProgress, ReasoningProgressNotifier};
use crate::ports::tool_executor::ToolExecutorPort;
use reasoner_domain::util::truncate_str;
use reasoner_domain::{
    AnswerSource, Query, ReasoningFailure, ReasoningOutcome, ReasoningPhase,
    ReasoningPromptTemplate, ReasoningReport, ReasoningResponse, ToolBatchResults,
    has_reasoning_structure, parse_tool_calls,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the RunReasoning use case
#[derive(Debug, Clone)]
pub struct RunReasoningInput {
    /// The query to answer
    pub query: Query,
}

impl RunReasoningInput {
    pub fn new(query: Query) -> Self {
        Self { query }
    }
}

/// Visited phases of one run; every move is checked against the protocol
struct PhaseTrace<'a> {
    visited: Vec<ReasoningPhase>,
    progress: &'a dyn ReasoningProgressNotifier,
}

impl<'a> PhaseTrace<'a> {
    fn start(progress: &'a dyn ReasoningProgressNotifier) -> Self {
        progress.on_phase_enter(ReasoningPhase::Start);
        Self {
            visited: vec![ReasoningPhase::Start],
            progress,
        }
    }

    fn current(&self) -> ReasoningPhase {
        self.visited
            .last()
            .copied()
            .unwrap_or(ReasoningPhase::Start)
    }

    fn advance(&mut self, next: ReasoningPhase) {
        let current = self.current();
        debug_assert!(
            current.can_transition_to(next),
            "invalid phase transition {} -> {}",
            current,
            next
        );
        debug!("Phase {} -> {}", current, next);
        self.visited.push(next);
        self.progress.on_phase_enter(next);
    }

    fn into_phases(self) -> Vec<ReasoningPhase> {
        self.visited
    }
}

/// Use case for answering a query with tool-augmented reasoning
pub struct RunReasoningUseCase {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
}

impl Clone for RunReasoningUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            tool_executor: self.tool_executor.clone(),
        }
    }
}

impl RunReasoningUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>, tool_executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            gateway,
            tool_executor,
        }
    }

    /// Execute the reasoning run
    pub async fn execute(&self, input: RunReasoningInput) -> ReasoningOutcome {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the reasoning run with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunReasoningInput,
        progress: &dyn ReasoningProgressNotifier,
    ) -> ReasoningOutcome {
        let query = input.query.content();
        let mut trace = PhaseTrace::start(progress);

        info!(
            "Starting reasoning with {}: {}",
            self.gateway.model(),
            truncate_str(query, 100)
        );

        // ==================== Round 1 ====================

        let prompt = ReasoningPromptTemplate::initial_prompt(query, &self.tool_executor.catalogue());
        progress.on_request_start(ReasoningPhase::RequestedInitialReasoning);

        let first = self.request(&prompt).await;
        if let Some(error) = &first.error {
            warn!("Initial reasoning request failed: {}", error);
            trace.advance(ReasoningPhase::Failed);
            return ReasoningOutcome::Failed(ReasoningFailure {
                query: query.to_string(),
                error: error.clone(),
                phases: trace.into_phases(),
            });
        }
        trace.advance(ReasoningPhase::RequestedInitialReasoning);

        if !has_reasoning_structure(&first.raw_text) {
            warn!("Initial response is missing one or more section markers");
        }
        debug!("Reasoning: {}", truncate_str(first.reasoning(), 200));
        debug!("Tools needed: {}", first.tools_needed());
        progress.on_initial_sections(&first.sections);

        let calls = parse_tool_calls(first.tools_needed());
        let tools_used = !calls.is_empty();

        if calls.is_empty() {
            info!("No tools requested; using initial answer");
            trace.advance(ReasoningPhase::Done);
            return ReasoningOutcome::Completed(Self::report(
                query,
                first,
                tools_used,
                ToolBatchResults::default(),
                None,
                trace.into_phases(),
            ));
        }

        // ==================== Tools ====================

        info!("Executing {} tool call(s)", calls.len());
        let tool_results = self.tool_executor.execute_all(&calls);

        for entry in tool_results.iter() {
            match entry.result.error() {
                Some(err) => warn!("Tool {} failed: {}", entry.result.call(), err),
                None => debug!("Tool {} = {}", entry.key, entry.result.display_value()),
            }
            progress.on_tool_result(&entry.key, &entry.result);
        }
        trace.advance(ReasoningPhase::ToolsExecuted);

        if !tool_results.any_success() {
            warn!("No tool call succeeded; using initial answer");
            trace.advance(ReasoningPhase::Done);
            return ReasoningOutcome::Completed(Self::report(
                query,
                first,
                tools_used,
                tool_results,
                None,
                trace.into_phases(),
            ));
        }

        // ==================== Round 2 ====================

        let follow_up = ReasoningPromptTemplate::follow_up_prompt(
            query,
            first.reasoning(),
            &tool_results.display_pairs(),
        );
        progress.on_request_start(ReasoningPhase::RequestedFollowUp);

        let second = self.request(&follow_up).await;
        match &second.error {
            None => trace.advance(ReasoningPhase::RequestedFollowUp),
            Some(error) => {
                warn!("Follow-up request failed, keeping initial answer: {}", error);
                progress.on_follow_up_failed(error);
            }
        }

        trace.advance(ReasoningPhase::Done);
        info!(
            "Reasoning completed ({} of {} tool calls succeeded)",
            tool_results.success_count(),
            tool_results.len()
        );

        ReasoningOutcome::Completed(Self::report(
            query,
            first,
            tools_used,
            tool_results,
            Some(second),
            trace.into_phases(),
        ))
    }

    /// One round-trip; a gateway error becomes an unsuccessful response
    async fn request(&self, prompt: &str) -> ReasoningResponse {
        match self.gateway.send(prompt).await {
            Ok(text) => ReasoningResponse::from_completion(text),
            Err(e) => ReasoningResponse::failure(e.to_string()),
        }
    }

    /// `follow_up` is `None` when no follow-up was attempted
    fn report(
        query: &str,
        first: ReasoningResponse,
        tools_used: bool,
        tool_results: ToolBatchResults,
        follow_up: Option<ReasoningResponse>,
        phases: Vec<ReasoningPhase>,
    ) -> ReasoningReport {
        let (final_answer, answer_source) = match follow_up {
            None => (first.final_answer().to_string(), AnswerSource::InitialRound),
            Some(second) if !second.success => (
                first.final_answer().to_string(),
                AnswerSource::InitialRoundFallback,
            ),
            Some(second) => (second.sections.final_answer, AnswerSource::FollowUpRound),
        };

        ReasoningReport {
            query: query.to_string(),
            reasoning: first.sections.reasoning,
            tools_needed: first.sections.tools_needed,
            tools_used,
            tool_results,
            final_answer,
            answer_source,
            raw_first_response: first.raw_text,
            phases,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use async_trait::async_trait;
    use reasoner_domain::{
        ReasoningSections, ToolCall, ToolDefinition, ToolError, ToolName, ToolResult, ToolValue,
    };
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Replays scripted completions and records every prompt it receives
    struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmGateway for ScriptedGateway {
        fn model(&self) -> &str {
            "scripted"
        }

        async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Transport("No more responses".to_string())))
        }
    }

    /// Minimal arithmetic executor standing in for the real registry
    struct FakeTools;

    impl ToolExecutorPort for FakeTools {
        fn catalogue(&self) -> Vec<ToolDefinition> {
            vec![
                ToolName::CalculateAverage.definition(),
                ToolName::SquareRoot.definition(),
            ]
        }

        fn execute(&self, call: &ToolCall) -> ToolResult {
            let numbers: Vec<f64> = call
                .arguments()
                .iter()
                .filter_map(|arg| arg.as_number())
                .collect();

            match call.tool() {
                Some(ToolName::CalculateAverage) if !numbers.is_empty() => ToolResult::success(
                    call.clone(),
                    ToolValue::Float(numbers.iter().sum::<f64>() / numbers.len() as f64),
                ),
                Some(ToolName::SquareRoot) if numbers.first().is_some_and(|n| *n >= 0.0) => {
                    ToolResult::success(call.clone(), ToolValue::Float(numbers[0].sqrt()))
                }
                Some(_) => ToolResult::failure(
                    call.clone(),
                    ToolError::execution("Cannot calculate square root of negative number"),
                ),
                None => ToolResult::failure(call.clone(), ToolError::unknown_tool(call.name())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl ReasoningProgressNotifier for RecordingProgress {
        fn on_request_start(&self, phase: ReasoningPhase) {
            self.push(format!("request:{}", phase));
        }

        fn on_phase_enter(&self, phase: ReasoningPhase) {
            self.push(format!("phase:{}", phase));
        }

        fn on_initial_sections(&self, sections: &ReasoningSections) {
            self.push(format!("tools_needed:{}", sections.tools_needed));
        }

        fn on_tool_result(&self, key: &str, result: &ToolResult) {
            self.push(format!("tool:{}={}", key, result.is_success()));
        }

        fn on_follow_up_failed(&self, error: &str) {
            self.push(format!("follow_up_failed:{}", error));
        }
    }

    fn use_case(gateway: Arc<ScriptedGateway>) -> RunReasoningUseCase {
        RunReasoningUseCase::new(gateway, Arc::new(FakeTools))
    }

    fn input(query: &str) -> RunReasoningInput {
        RunReasoningInput::new(Query::try_new(query).unwrap())
    }

    const AVERAGE_THEN_ROOT: &str = "REASONING:\n1. Average 18 and 50.\n2. Take the square root.\n\nTOOLS_NEEDED:\ncalculate_average(18, 50)\nsquare_root(34)\n\nFINAL_ANSWER:\nTools need to be executed first.";

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_two_round_flow_uses_follow_up_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(AVERAGE_THEN_ROOT.to_string()),
            Ok("FINAL_ANSWER: The square root of the average is approximately 5.831.".to_string()),
        ]));

        let outcome = use_case(gateway.clone())
            .execute(input("What's the square root of the average of 18 and 50?"))
            .await;

        let report = outcome.report().expect("run should complete");
        assert_eq!(
            report.final_answer,
            "The square root of the average is approximately 5.831."
        );
        assert_eq!(report.answer_source, AnswerSource::FollowUpRound);
        assert!(report.tools_used);
        assert_eq!(
            report.tools_needed,
            "calculate_average(18, 50) square_root(34)"
        );
        assert_eq!(report.raw_first_response, AVERAGE_THEN_ROOT);

        let lines = report.tool_result_lines();
        assert_eq!(lines[0], ("calculate_average".to_string(), "34.0".to_string()));
        assert_eq!(lines[1].0, "square_root");
        assert!(lines[1].1.starts_with("5.83"));

        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("What's the square root of the average of 18 and 50?"));
        assert!(prompts[0].contains("- square_root(number): Calculate square root of a number"));
        assert!(prompts[1].contains("- calculate_average: 34.0"));
        assert!(prompts[1].contains("- square_root: 5.83"));
        assert!(prompts[1].contains("Previous reasoning:\n1. Average 18 and 50. 2. Take the square root."));

        assert_eq!(
            outcome.phases(),
            &[
                ReasoningPhase::Start,
                ReasoningPhase::RequestedInitialReasoning,
                ReasoningPhase::ToolsExecuted,
                ReasoningPhase::RequestedFollowUp,
                ReasoningPhase::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_no_tools_needed_skips_follow_up() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(
            "REASONING: Simple addition.\nTOOLS_NEEDED: none\nFINAL_ANSWER: 4".to_string(),
        )]));

        let outcome = use_case(gateway.clone()).execute(input("What is 2 + 2?")).await;

        let report = outcome.report().unwrap();
        assert_eq!(report.final_answer, "4");
        assert_eq!(report.answer_source, AnswerSource::InitialRound);
        assert!(!report.tools_used);
        assert!(report.tool_results.is_empty());
        assert_eq!(gateway.prompts().len(), 1);
        assert_eq!(
            outcome.phases(),
            &[
                ReasoningPhase::Start,
                ReasoningPhase::RequestedInitialReasoning,
                ReasoningPhase::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_initial_request_failure_is_fatal() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(GatewayError::Transport(
            "Gemini API error 500: internal".to_string(),
        ))]));

        let outcome = use_case(gateway.clone()).execute(input("anything")).await;

        assert!(!outcome.is_success());
        assert_eq!(outcome.query(), "anything");
        assert_eq!(
            outcome.error(),
            Some("Transport error: Gemini API error 500: internal")
        );
        assert_eq!(
            outcome.phases(),
            &[ReasoningPhase::Start, ReasoningPhase::Failed]
        );
        assert_eq!(gateway.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_fatal() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Err(
            GatewayError::MalformedEnvelope("missing candidates".to_string()),
        )]));

        let outcome = use_case(gateway).execute(input("anything")).await;
        assert_eq!(outcome.final_phase(), ReasoningPhase::Failed);
        assert!(outcome.error().unwrap().contains("missing candidates"));
    }

    #[tokio::test]
    async fn test_follow_up_failure_keeps_initial_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok(AVERAGE_THEN_ROOT.to_string()),
            Err(GatewayError::Transport("connection reset".to_string())),
        ]));
        let progress = RecordingProgress::default();

        let outcome = use_case(gateway)
            .execute_with_progress(input("q"), &progress)
            .await;

        let report = outcome.report().unwrap();
        assert_eq!(report.final_answer, "Tools need to be executed first.");
        assert_eq!(report.answer_source, AnswerSource::InitialRoundFallback);
        assert_eq!(report.tool_results.len(), 2);
        assert_eq!(
            outcome.phases(),
            &[
                ReasoningPhase::Start,
                ReasoningPhase::RequestedInitialReasoning,
                ReasoningPhase::ToolsExecuted,
                ReasoningPhase::Done,
            ]
        );
        assert!(
            progress
                .events()
                .contains(&"follow_up_failed:Transport error: connection reset".to_string())
        );
    }

    #[tokio::test]
    async fn test_all_tools_failed_skips_follow_up() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(
            "REASONING: r\nTOOLS_NEEDED: square_root(-1) lookup_weather('Paris')\nFINAL_ANSWER: unknown"
                .to_string(),
        )]));

        let outcome = use_case(gateway.clone()).execute(input("q")).await;

        let report = outcome.report().unwrap();
        assert_eq!(report.final_answer, "unknown");
        assert_eq!(report.answer_source, AnswerSource::InitialRound);
        assert!(report.tools_used);
        assert!(!report.tool_results.any_success());
        assert_eq!(gateway.prompts().len(), 1);

        let lines = report.tool_result_lines();
        assert_eq!(lines[0].0, "square_root");
        assert!(lines[0].1.starts_with("Error: "));
        assert_eq!(
            lines[1],
            (
                "lookup_weather".to_string(),
                "Error: Unknown function: lookup_weather".to_string()
            )
        );
    }

    #[tokio::test]
    async fn test_failed_call_does_not_block_siblings() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("TOOLS_NEEDED: square_root(-1) square_root(16)\nFINAL_ANSWER: pending".to_string()),
            Ok("FINAL_ANSWER: 4".to_string()),
        ]));

        let outcome = use_case(gateway.clone()).execute(input("q")).await;

        let report = outcome.report().unwrap();
        assert_eq!(report.final_answer, "4");
        let keys: Vec<&str> = report.tool_results.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["square_root_0", "square_root_1"]);

        let prompts = gateway.prompts();
        assert!(prompts[1].contains("- square_root_0: Error: "));
        assert!(prompts[1].contains("- square_root_1: 4.0"));
    }

    #[tokio::test]
    async fn test_unstructured_response_completes_with_empty_answer() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Ok(
            "I think the answer is 42.".to_string(),
        )]));

        let outcome = use_case(gateway).execute(input("q")).await;

        let report = outcome.report().unwrap();
        assert_eq!(report.final_answer, "");
        assert_eq!(report.reasoning, "");
        assert!(!report.tools_used);
    }

    #[tokio::test]
    async fn test_progress_events_in_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Ok("TOOLS_NEEDED: square_root(9)\nFINAL_ANSWER: pending".to_string()),
            Ok("FINAL_ANSWER: 3".to_string()),
        ]));
        let progress = RecordingProgress::default();

        use_case(gateway)
            .execute_with_progress(input("q"), &progress)
            .await;

        assert_eq!(
            progress.events(),
            vec![
                "phase:start",
                "request:requested_initial_reasoning",
                "phase:requested_initial_reasoning",
                "tools_needed:square_root(9)",
                "tool:square_root=true",
                "phase:tools_executed",
                "request:requested_follow_up",
                "phase:requested_follow_up",
                "phase:done",
            ]
        );
    }
}
