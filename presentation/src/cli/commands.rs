//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for reasoning results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Query, reasoning, tool results and final answer
    Full,
    /// Only the final answer
    Answer,
    /// JSON output
    Json,
}

impl From<OutputFormat> for reasoner_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => reasoner_domain::OutputFormat::Full,
            OutputFormat::Answer => reasoner_domain::OutputFormat::Answer,
            OutputFormat::Json => reasoner_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tool-reasoner
#[derive(Parser, Debug)]
#[command(name = "tool-reasoner")]
#[command(author, version, about = "Tool-enhanced reasoning with Gemini")]
#[command(long_about = r#"
Tool Reasoner answers a question by letting the model reason step by step,
running the deterministic tools it asks for, and feeding the results back.

The process has two rounds:
1. Reasoning: the model writes REASONING, TOOLS_NEEDED and FINAL_ANSWER sections
2. Follow-up: if any tool succeeded, the model combines the results into the final answer

Configuration files are loaded from (in priority order):
1. REASONER_* environment variables
2. --config <path>     Explicit config file
3. ./reasoner.toml     Project-level config
4. ~/.config/tool-reasoner/config.toml   Global config

Example:
  tool-reasoner -q "What's the square root of the average of 18 and 50?"
  tool-reasoner -v "How many vowels are in the word 'Multimodality'?"
  tool-reasoner --no-reasoning -o answer "Is 'machine' longer than 'reasoning'?"
  tool-reasoner --list-tools
"#)]
pub struct Cli {
    /// The question to reason about
    #[arg(value_name = "QUERY", conflicts_with = "query")]
    pub positional_query: Option<String>,

    /// The question to reason about
    #[arg(short, long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Hide the reasoning section in the output
    #[arg(long)]
    pub no_reasoning: bool,

    /// List the available tools and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Gemini API key (overrides config and GEMINI_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = show processing steps, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress banner and progress indicators
    #[arg(long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The query from `-q` or the positional argument
    pub fn query_text(&self) -> Option<&str> {
        self.query
            .as_deref()
            .or(self.positional_query.as_deref())
            .filter(|q| !q.trim().is_empty())
    }

    /// Whether the command needs a query at all
    pub fn requires_query(&self) -> bool {
        !(self.list_tools || self.show_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_flag() {
        let cli = Cli::try_parse_from(["tool-reasoner", "-q", "What is 2 + 2?"]).unwrap();
        assert_eq!(cli.query_text(), Some("What is 2 + 2?"));
        assert!(cli.requires_query());
    }

    #[test]
    fn test_positional_query() {
        let cli = Cli::try_parse_from(["tool-reasoner", "-vv", "How many vowels?"]).unwrap();
        assert_eq!(cli.query_text(), Some("How many vowels?"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_query_given_twice_conflicts() {
        assert!(Cli::try_parse_from(["tool-reasoner", "-q", "a", "b"]).is_err());
    }

    #[test]
    fn test_list_tools_needs_no_query() {
        let cli = Cli::try_parse_from(["tool-reasoner", "--list-tools"]).unwrap();
        assert!(cli.query_text().is_none());
        assert!(!cli.requires_query());
    }

    #[test]
    fn test_output_format() {
        let cli = Cli::try_parse_from(["tool-reasoner", "-o", "json", "-q", "x"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(
            reasoner_domain::OutputFormat::from(OutputFormat::Answer),
            reasoner_domain::OutputFormat::Answer
        );
        assert!(Cli::try_parse_from(["tool-reasoner", "-o", "yaml", "-q", "x"]).is_err());
    }

    #[test]
    fn test_blank_query_is_none() {
        let cli = Cli::try_parse_from(["tool-reasoner", "-q", "   "]).unwrap();
        assert!(cli.query_text().is_none());
    }
}
