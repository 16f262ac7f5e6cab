//! Progress reporting for reasoning runs

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use reasoner_application::ports::progress::ReasoningProgressNotifier;
use reasoner_domain::{ReasoningPhase, ReasoningSections, ToolResult};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per model request
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn request_display_name(phase: ReasoningPhase) -> &'static str {
        match phase {
            ReasoningPhase::RequestedFollowUp => "Round 2: Final answer",
            _ => "Round 1: Reasoning",
        }
    }

    fn finish(&self, message: Option<String>) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            match message {
                Some(message) => pb.finish_with_message(message),
                None => pb.finish_and_clear(),
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReasoningProgressNotifier for ProgressReporter {
    fn on_request_start(&self, phase: ReasoningPhase) {
        self.finish(None);

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::request_display_name(phase));
        pb.set_message("Waiting for model...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_phase_enter(&self, phase: ReasoningPhase) {
        match phase {
            ReasoningPhase::ToolsExecuted | ReasoningPhase::Done => {
                self.finish(Some(format!("{}", "complete".green())));
            }
            ReasoningPhase::Failed => self.finish(Some(format!("{}", "failed".red()))),
            _ => {}
        }
    }

    fn on_tool_result(&self, key: &str, result: &ToolResult) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(SimpleProgress::tool_line(key, result));
        }
    }
}

/// Simple text-based progress (no fancy UI); the `-v` processing trace
pub struct SimpleProgress;

impl SimpleProgress {
    fn request_line(phase: ReasoningPhase) -> String {
        let message = match phase {
            ReasoningPhase::RequestedFollowUp => "Requesting final answer with tool results...",
            _ => "Processing query with LLM reasoning...",
        };
        format!("{} {}", "->".cyan(), message.bold())
    }

    fn sections_lines(sections: &ReasoningSections) -> String {
        format!(
            "\n{}\n{}\n\n{} {}",
            "LLM Reasoning:".bold(),
            ConsoleFormatter::indent(&sections.reasoning, "  "),
            "Tools Needed:".bold(),
            sections.tools_needed
        )
    }

    fn tool_line(key: &str, result: &ToolResult) -> String {
        match (result.value(), result.error()) {
            (Some(value), _) => format!("  {} {}: {}", "✓".green(), key, value),
            (None, Some(error)) => format!("  {} {}: {}", "✗".red(), key, error),
            (None, None) => format!("  {} {}", "?".yellow(), key),
        }
    }
}

impl ReasoningProgressNotifier for SimpleProgress {
    fn on_request_start(&self, phase: ReasoningPhase) {
        eprintln!("{}", Self::request_line(phase));
    }

    fn on_phase_enter(&self, phase: ReasoningPhase) {
        if phase == ReasoningPhase::ToolsExecuted {
            eprintln!();
        }
    }

    fn on_initial_sections(&self, sections: &ReasoningSections) {
        eprintln!("{}\n", Self::sections_lines(sections));
    }

    fn on_tool_result(&self, key: &str, result: &ToolResult) {
        eprintln!("{}", Self::tool_line(key, result));
    }

    fn on_follow_up_failed(&self, error: &str) {
        eprintln!(
            "  {} Follow-up request failed ({}); keeping the first-round answer",
            "!".yellow(),
            error
        );
    }
}
