//! Command-line interface for prompt-relay
//!
//! Provides `ask`, `name`, and `completions` subcommands.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_settings, merge_cli_with_settings, CliOverrides, Settings};

mod ask;
mod completions;
mod name;
mod utils;

/// Send a prompt to a chat-completion endpoint and print the reply
#[derive(Parser)]
#[command(name = "prompt-relay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    shared: SharedArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Options common to every request-sending subcommand
#[derive(Args, Debug, Default)]
pub struct SharedArgs {
    /// Model identifier
    #[arg(short, long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    /// API root, e.g. http://localhost:11434/v1
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Settings file (default: ~/.prompt-relay/config.toml)
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl SharedArgs {
    /// Layered settings with CLI flags applied on top
    pub fn settings(&self) -> Result<Settings> {
        let base = load_settings(self.config.as_deref())?;
        let overrides =
            CliOverrides { model: self.model.clone(), base_url: self.base_url.clone() };
        Ok(merge_cli_with_settings(base, overrides))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Forward a prompt verbatim and print the model's reply
    Ask(ask::AskArgs),

    /// Ask the model to suggest a filename for some note content
    Name(name::NameArgs),

    /// Print shell completions
    Completions(completions::CompletionsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Ask(args) => ask::run(args, &cli.shared),
        Commands::Name(args) => name::run(args, &cli.shared),
        Commands::Completions(args) => completions::run(args),
    }
}
