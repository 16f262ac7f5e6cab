//! Console output formatter for reasoning results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use reasoner_domain::{ReasoningOutcome, ReasoningReport, ToolDefinition};

/// Formats reasoning outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &ReasoningOutcome, show_reasoning: bool) -> String {
        match outcome {
            ReasoningOutcome::Completed(report) => Self::format_report(report, show_reasoning),
            ReasoningOutcome::Failed(failure) => Self::format_error(&failure.error),
        }
    }

    fn format_report(report: &ReasoningReport, show_reasoning: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Query:".cyan().bold(), report.query));

        if show_reasoning {
            output.push_str(&format!("{}\n", "Reasoning:".cyan().bold()));
            output.push_str(&report.reasoning);
            output.push_str("\n\n");
        }

        if report.tools_used {
            output.push_str(&format!("{}\n", "Tools Used:".cyan().bold()));
            for (key, value) in report.tool_result_lines() {
                output.push_str(&format!("  * {}: {}\n", key.yellow(), value));
            }
            output.push('\n');
        } else {
            output.push_str(&format!("{} None\n\n", "Tools Used:".cyan().bold()));
        }

        output.push_str(&format!("{}\n", "Final Answer:".green().bold()));
        output.push_str(&report.final_answer);
        output.push('\n');

        output
    }

    fn format_error(error: &str) -> String {
        format!("{} {}\n", "Error:".red().bold(), error)
    }

    /// Format as JSON
    pub fn format_json(outcome: &ReasoningOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the final answer only (concise output)
    pub fn format_answer_only(outcome: &ReasoningOutcome) -> String {
        match outcome {
            ReasoningOutcome::Completed(report) => format!("{}\n", report.final_answer),
            ReasoningOutcome::Failed(failure) => Self::format_error(&failure.error),
        }
    }

    /// Format the tool catalogue for `--list-tools`
    pub fn format_tool_list(tools: &[ToolDefinition]) -> String {
        let mut output = format!("{}\n{}\n", "Available Tools:".bold(), "=".repeat(40));
        for tool in tools {
            output.push_str(&format!("  * {}\n", tool.catalogue_line()));
        }
        output
    }

    /// Banner printed before a run unless `--quiet`
    pub fn banner(model: &str) -> String {
        format!(
            "{}\n{}\n",
            format!("Tool-Enhanced Reasoning ({})", model).bold(),
            "=".repeat(50).cyan()
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &ReasoningOutcome, show_reasoning: bool) -> String {
        Self::format(outcome, show_reasoning)
    }

    fn format_json(&self, outcome: &ReasoningOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_answer_only(&self, outcome: &ReasoningOutcome) -> String {
        Self::format_answer_only(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reasoner_domain::{
        AnswerSource, OutputFormat, ReasoningFailure, ReasoningPhase, ToolArgument,
        ToolBatchResults, ToolCall, ToolName, ToolResult, ToolValue,
    };

    fn plain() {
        colored::control::set_override(false);
    }

    fn completed(tools_used: bool) -> ReasoningOutcome {
        let tool_results = if tools_used {
            let call = ToolCall::new(
                "square_root",
                vec![ToolArgument::Number(16.0)],
                "square_root(16)",
            );
            let result = ToolResult::success(call.clone(), ToolValue::Float(4.0));
            ToolBatchResults::from_batch(&[call], vec![result])
        } else {
            ToolBatchResults::default()
        };

        ReasoningOutcome::Completed(ReasoningReport {
            query: "What is the square root of 16?".to_string(),
            reasoning: "Use the square root tool.".to_string(),
            tools_needed: "square_root(16)".to_string(),
            tools_used,
            tool_results,
            final_answer: "The square root of 16 is 4.".to_string(),
            answer_source: AnswerSource::FollowUpRound,
            raw_first_response: String::new(),
            phases: vec![ReasoningPhase::Start, ReasoningPhase::Done],
        })
    }

    fn failed() -> ReasoningOutcome {
        ReasoningOutcome::Failed(ReasoningFailure {
            query: "q".to_string(),
            error: "Transport error: connection refused".to_string(),
            phases: vec![ReasoningPhase::Start, ReasoningPhase::Failed],
        })
    }

    #[test]
    fn test_full_format() {
        plain();
        let output = ConsoleFormatter::format(&completed(true), true);
        assert_eq!(
            output,
            "Query: What is the square root of 16?\n\n\
             Reasoning:\nUse the square root tool.\n\n\
             Tools Used:\n  * square_root: 4.0\n\n\
             Final Answer:\nThe square root of 16 is 4.\n"
        );
    }

    #[test]
    fn test_full_format_without_reasoning_or_tools() {
        plain();
        let output = ConsoleFormatter::format(&completed(false), false);
        assert!(!output.contains("Reasoning:"));
        assert!(output.contains("Tools Used: None"));
        assert!(output.ends_with("The square root of 16 is 4.\n"));
    }

    #[test]
    fn test_failure_format() {
        plain();
        assert_eq!(
            ConsoleFormatter::format(&failed(), true),
            "Error: Transport error: connection refused\n"
        );
        assert_eq!(
            ConsoleFormatter::format_answer_only(&failed()),
            "Error: Transport error: connection refused\n"
        );
    }

    #[test]
    fn test_answer_only() {
        assert_eq!(
            ConsoleFormatter.render(&completed(true), OutputFormat::Answer, true),
            "The square root of 16 is 4.\n"
        );
    }

    #[test]
    fn test_json_format() {
        let json = ConsoleFormatter.render(&completed(true), OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["final_answer"], "The square root of 16 is 4.");

        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&failed())).unwrap();
        assert_eq!(value["status"], "failed");
    }

    #[test]
    fn test_tool_list() {
        plain();
        let output = ConsoleFormatter::format_tool_list(&[ToolName::SquareRoot.definition()]);
        assert!(output.starts_with("Available Tools:\n"));
        assert!(output.contains("  * square_root(number): "));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
