//! CLI entrypoint for Tool Reasoner
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::control as color_control;
use reasoner_application::{
    LlmGateway, NoProgress, ReasoningProgressNotifier, RunReasoningInput, RunReasoningUseCase,
    ToolExecutorPort,
};
use reasoner_domain::Query;
use reasoner_infrastructure::{ConfigLoader, FileConfig, GeminiGateway, ToolRouter};
use reasoner_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressMode, ProgressReporter,
    SimpleProgress,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Reasoning ran but reported failure
const EXIT_REASONING_FAILED: u8 = 1;
/// Usage or configuration problem
const EXIT_CONFIG_ERROR: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<ExitCode> {
    info!("Starting Tool Reasoner");

    let tools = Arc::new(ToolRouter::new());

    // Tool listing needs neither config nor an API key
    if cli.list_tools {
        print!("{}", ConsoleFormatter::format_tool_list(&tools.catalogue()));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = load_config(&cli)?;
    if let Some(model) = &cli.model {
        config.gemini.model = model.clone();
    }
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("Effective configuration:");
        print!("{}", effective_config_toml(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    let Some(query_text) = cli.query_text() else {
        bail!("A query is required (use -q/--query or pass it as an argument), or use --list-tools");
    };
    let query = Query::try_new(query_text)?;

    let output = OutputConfig {
        format: cli.output.map(Into::into).unwrap_or(config.output.format),
        show_reasoning: config.output.show_reasoning && !cli.no_reasoning,
        color: config.output.color,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };
    if !output.color {
        color_control::set_override(false);
    }
    debug!("Output settings: {:?}", output);

    let api_key = config
        .gemini
        .resolve_api_key(cli.api_key.as_deref())
        .context("Gemini API key not found. Set GEMINI_API_KEY, add [gemini] api_key to the config, or pass --api-key")?;

    // === Dependency Injection ===
    let gateway = GeminiGateway::new(api_key, config.gemini.to_generation_params())?
        .with_base_url(config.gemini.base_url.clone());
    let gateway: Arc<dyn LlmGateway> = Arc::new(gateway);

    if output.show_banner() {
        println!("{}", ConsoleFormatter::banner(gateway.model()));
    }

    let use_case = RunReasoningUseCase::new(gateway, tools);
    let input = RunReasoningInput::new(query);

    let progress: Box<dyn ReasoningProgressNotifier> = match output.progress_mode() {
        ProgressMode::Silent => Box::new(NoProgress),
        ProgressMode::Spinner => Box::new(ProgressReporter::new()),
        ProgressMode::Trace => Box::new(SimpleProgress),
    };
    let outcome = use_case
        .execute_with_progress(input, progress.as_ref())
        .await;

    print!(
        "{}",
        ConsoleFormatter.render(&outcome, output.format, output.show_reasoning)
    );

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_REASONING_FAILED))
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")
}

fn effective_config_toml(config: &FileConfig) -> Result<String> {
    let mut shown = config.clone();
    if shown.gemini.api_key.is_some() {
        shown.gemini.api_key = Some("<redacted>".to_string());
    }
    toml::to_string_pretty(&shown).context("Failed to render configuration")
}
