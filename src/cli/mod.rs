//! Command-line front end.
//!
//! Thin layer over [`MediaService`](crate::services::MediaService): one-shot
//! queries and commands, plus a `watch` mode that prints every state change.

mod commands;
pub mod formatting;
mod types;


use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::execute;
pub use types::{CliError, CommandResult};

/// Media player status and control over MPRIS.
#[derive(Debug, Parser)]
#[command(name = "nowbar", version)]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the media state every time it changes
    Watch,
    /// Print the media state once
    Status,
    /// List discovered players
    Players,
    /// Go to the previous track on the active player
    Previous,
    /// Toggle play/pause on the active player
    PlayPause,
    /// Skip to the next track on the active player
    Next,
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Configuration subcommands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the JSON schema of the configuration file
    Schema,
    /// Print the effective configuration as TOML
    Show,
}
