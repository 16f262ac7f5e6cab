//! Output configuration from TOML (`[output]` section)

use reasoner_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Include the reasoning section in the full report
    pub show_reasoning: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_reasoning: true,
            color: true,
        }
    }
}
