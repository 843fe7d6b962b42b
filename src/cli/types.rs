use thiserror::Error;

use crate::{NowbarError, services::mpris::MediaError};

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// The media service could not be started or queried.
    #[error("Media service error: {0}")]
    Media(#[from] MediaError),

    /// An error occurred in the configuration system.
    #[error("Configuration error: {0}")]
    Config(#[from] NowbarError),

    /// The command needs a player but none is running.
    #[error("No media player found")]
    NoPlayer,

    /// Output could not be rendered.
    #[error("Failed to render output: {0}")]
    Render(String),
}

/// Type alias for command execution results.
///
/// Commands return the text to print on success.
pub type CommandResult = Result<String, CliError>;
