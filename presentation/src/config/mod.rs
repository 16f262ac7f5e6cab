//! Presentation-level configuration
//!
//! Resolved output settings after merging config files with CLI flags.

use reasoner_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: full, answer, or json
    pub format: OutputFormat,
    /// Include the reasoning section in the full report
    pub show_reasoning: bool,
    /// Enable colored terminal output
    pub color: bool,
    /// Verbosity level from `-v`
    pub verbose: u8,
    /// Suppress banner and progress
    pub quiet: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Full,
            show_reasoning: true,
            color: true,
            verbose: 0,
            quiet: false,
        }
    }
}

impl OutputConfig {
    /// Banner is shown only for human-readable full output
    pub fn show_banner(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Full
    }

    /// Step-by-step trace with `-v`, a spinner otherwise, nothing with `--quiet`
    pub fn progress_mode(&self) -> ProgressMode {
        if self.quiet {
            ProgressMode::Silent
        } else if self.verbose > 0 {
            ProgressMode::Trace
        } else {
            ProgressMode::Spinner
        }
    }
}

/// How progress is shown during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Silent,
    Spinner,
    Trace,
}
