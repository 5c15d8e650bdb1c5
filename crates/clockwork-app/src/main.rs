mod agent;
mod cli;
mod terminal;
mod web;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clockwork_ai::{AiClient, BlockingConversation};
use clockwork_common::ClockworkError;
use clockwork_config::ClockworkConfig;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

fn init_logging(directive: &str) {
    let filter = match directive.parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(e) => {
            eprintln!("Invalid log directive {directive:?} ({e}), using clockwork=info");
            EnvFilter::new("clockwork=info")
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(args: &Args) -> Result<ClockworkConfig, ClockworkError> {
    let config = match args.config.as_deref() {
        Some(path) => clockwork_config::load_config_from(path)?,
        None => clockwork_config::load_config()?,
    };
    Ok(config)
}

fn build_client(config: &ClockworkConfig) -> Result<Arc<dyn AiClient>, ClockworkError> {
    let client = agent::gemini_client(&config.model)
        .map_err(|e| ClockworkError::Ai(e.to_string()))?;
    Ok(Arc::new(client))
}

fn serve(
    mut config: ClockworkConfig,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), ClockworkError> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let runner = agent::build_runner(&config, build_client(&config)?);
    let state = web::AppState::new(
        runner.clone(),
        agent::build_conversation(&config, runner),
        config.model.name.as_str(),
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(&config.server.bind_addr(), state))
}

fn chat(config: ClockworkConfig) -> Result<(), ClockworkError> {
    let runner = agent::build_runner(&config, build_client(&config)?);
    let chat = BlockingConversation::new(agent::build_conversation(&config, runner))?;
    terminal::run_chat(&chat, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn run(args: Args, config: ClockworkConfig) -> Result<(), ClockworkError> {
    match args.command() {
        Command::Serve { host, port } => serve(config, host, port),
        Command::Chat => chat(config),
    }
}

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let args = cli::parse();

    // Logging needs the configured level, so config is loaded first and
    // any failure is reported once the subscriber is up.
    let config = load_config(&args);
    let level = config
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(&args.log_directive(level.directive()));

    tracing::info!("Clockwork v{} starting...", env!("CARGO_PKG_VERSION"));
    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {e}"),
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            eprintln!("clockwork: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(model = %config.model.name, "Config loaded");
    tracing::debug!("Effective config: {}", clockwork_config::config_to_json(&config));

    match run(args, config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("clockwork: {e}");
            ExitCode::FAILURE
        }
    }
}
