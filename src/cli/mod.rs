//! Command-line interface definitions.

pub mod check;
pub mod index;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// greedwatch - LINE bot for the crypto Fear & Greed index.
#[derive(Parser, Debug)]
#[command(name = "greedwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the webhook server and scheduled pushes (foreground)
    Run(RunArgs),

    /// Fetch the current index once and print it
    Index(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `greedwatch check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration and required environment variables
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file (optional; defaults apply when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override HTTP port (takes precedence over PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
