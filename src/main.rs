//! Fact Guess - terminal number fact game
//!
//! Reveal a hidden maths fact letter by letter, then guess the fact and
//! its number.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SourceArgs};
use fact_guess::{FactProvider, GameConfig, run_tui};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Fact(args) => run_fact(args).await,
    }
}

/// Loads config and builds the round fact provider.
fn provider_from_args(args: &SourceArgs) -> Result<(GameConfig, FactProvider)> {
    let config = GameConfig::load(args.config.as_deref()).context("Failed to load config")?;
    let provider =
        FactProvider::from_config(&config, args.offline).context("Failed to build fact provider")?;
    Ok((config, provider))
}

/// Play in the terminal UI, logging to a file
async fn run_play(args: SourceArgs) -> Result<()> {
    let (config, provider) = provider_from_args(&args)?;
    let trivia = FactProvider::trivia_from_config(&config, args.offline)
        .context("Failed to build trivia provider")?;

    // Log to a file so output doesn't corrupt the TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    info!(offline = args.offline, "Starting Fact Guess");
    run_tui(provider, trivia).await
}

/// Fetch and print a single fact
async fn run_fact(args: SourceArgs) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (_, provider) = provider_from_args(&args)?;
    let fact = provider.get_fact().await;
    println!("{} {}", fact.number(), fact.text());
    Ok(())
}
