//! CLI entrypoint for memchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use memchat_application::{
    AuthUseCase, ChatParams, ChatTurnUseCase, Memory, SessionController,
};
use memchat_domain::UserId;
use memchat_infrastructure::{ConfigLoader, FileConfig, SupabaseAuthProvider, build_memory};
use memchat_presentation::{ChatRepl, Cli, Command, ConsoleFormatter, ReplConfig, TuiApp};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ConfigLoader::load_dotenv();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()?
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!("{}", ConsoleFormatter::section("Effective configuration"));
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    if let Some(model) = &cli.model {
        config.llm.config.model = model.clone();
    }
    if let Some(user_id) = &cli.user_id {
        config.chat.default_user_id = user_id.clone();
    }

    match cli.subcommand() {
        Command::Chat => run_chat(&cli, config).await,
        Command::App => run_app(&cli, config).await,
    }
}

fn verbosity_filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn chat_params(config: &FileConfig) -> Result<ChatParams> {
    let user_id = UserId::new(config.chat.default_user_id.clone())?;
    Ok(ChatParams::default()
        .with_memory_limit(config.chat.memory_limit)
        .with_default_user_id(user_id))
}

async fn connect_memory(config: &FileConfig) -> Result<Arc<Memory>> {
    config.validate()?;
    let memory = build_memory(&config.memory_config())
        .await
        .context("Failed to initialize memory")?;
    Ok(Arc::new(memory))
}

async fn run_chat(cli: &Cli, config: FileConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(verbosity_filter(cli.verbose))
        .with_target(false)
        .init();

    info!("Starting memchat terminal chat");

    let params = chat_params(&config)?;
    let user_id = params.default_user_id.clone();
    let memory = connect_memory(&config).await?;
    let use_case = ChatTurnUseCase::new(memory).with_params(params);

    let repl_config = ReplConfig::default()
        .with_progress(config.chat.show_progress && !cli.quiet)
        .with_history_file(config.chat.history_file.as_ref().map(PathBuf::from));

    ChatRepl::new(use_case, user_id)
        .with_config(repl_config)
        .run()
        .await?;
    Ok(())
}

async fn run_app(cli: &Cli, config: FileConfig) -> Result<()> {
    let auth = config.validate_auth()?;

    // The alternate screen owns the terminal, so logs go to a file
    let log_dir = dirs::data_dir()
        .map(|d| d.join("memchat"))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create {}", log_dir.display()))?;
    let appender = tracing_appender::rolling::never(&log_dir, "memchat.log");
    let (writer, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(verbosity_filter(cli.verbose.max(1)))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    info!("Starting memchat app");

    let provider = Arc::new(SupabaseAuthProvider::new(
        auth.supabase_url.clone(),
        auth.supabase_key.clone(),
    ));
    let params = chat_params(&config)?;
    let memory = connect_memory(&config).await?;
    let controller = SessionController::new(
        AuthUseCase::new(provider),
        ChatTurnUseCase::new(memory.clone()).with_params(params),
        memory,
    );

    TuiApp::new(controller).run().await?;
    Ok(())
}
