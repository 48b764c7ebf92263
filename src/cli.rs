//! Command-line interface for fact_guess.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Fact Guess - reveal a hidden maths fact and name its number
#[derive(Parser, Debug)]
#[command(name = "fact_guess")]
#[command(about = "Hangman-style number fact guessing game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the game in the terminal
    Play(SourceArgs),

    /// Fetch one fact and print it
    Fact(SourceArgs),
}

/// Where facts come from
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Path to a TOML config file (defaults to fact_guess.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the remote API and use only the local cache
    #[arg(long)]
    pub offline: bool,
}
