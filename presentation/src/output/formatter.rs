//! Output formatter trait

use reasoner_domain::{OutputFormat, ReasoningOutcome};

/// Trait for formatting reasoning outcomes
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, outcome: &ReasoningOutcome, show_reasoning: bool) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &ReasoningOutcome) -> String;

    /// Format the final answer only (concise output)
    fn format_answer_only(&self, outcome: &ReasoningOutcome) -> String;

    /// Dispatch on the selected output format
    fn render(&self, outcome: &ReasoningOutcome, format: OutputFormat, show_reasoning: bool) -> String {
        match format {
            OutputFormat::Full => self.format(outcome, show_reasoning),
            OutputFormat::Answer => self.format_answer_only(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
