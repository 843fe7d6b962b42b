use std::sync::Arc;

use futures::StreamExt;
use tokio::signal;
use tracing::info;

use super::{
    CliCommand, CliError, CommandResult, ConfigCommand,
    formatting::{format_players, format_state},
};
use crate::{
    config::Config,
    services::mpris::{Command, MediaService, ZbusClient},
};

/// Run `command` with the loaded configuration.
///
/// # Errors
/// Returns `CliError` if the bus cannot be reached, no player is running for
/// a transport command, or output cannot be rendered.
pub async fn execute(command: &CliCommand, config: &Config) -> CommandResult {
    match command {
        CliCommand::Watch => watch(config).await,
        CliCommand::Status => status(config).await,
        CliCommand::Players => players(config).await,
        CliCommand::Previous => transport(config, Command::Previous).await,
        CliCommand::PlayPause => transport(config, Command::PlayPause).await,
        CliCommand::Next => transport(config, Command::Next).await,
        CliCommand::Config(ConfigCommand::Schema) => schema(),
        CliCommand::Config(ConfigCommand::Show) => show(config),
    }
}

async fn one_shot_service(config: &Config) -> Result<MediaService, CliError> {
    let bus = ZbusClient::session(config.media.call_timeout()).await?;
    Ok(MediaService::idle(Arc::new(bus), &config.media))
}

async fn watch(config: &Config) -> CommandResult {
    let mut service = MediaService::start(&config.media).await?;
    let mut states = Box::pin(service.watch());
    let mut last_line = None;

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("Interrupted, stopping");
                break;
            }
            state = states.next() => {
                let Some(state) = state else { break };
                let line = format_state(&state);
                if last_line.as_ref() != Some(&line) {
                    println!("{line}");
                    last_line = Some(line);
                }
            }
        }
    }

    service.shutdown();
    Ok(String::new())
}

async fn status(config: &Config) -> CommandResult {
    let service = one_shot_service(config).await?;
    let state = service.refresh().await;

    if !state.visible() {
        return Err(CliError::NoPlayer);
    }
    Ok(format_state(&state))
}

async fn players(config: &Config) -> CommandResult {
    let service = one_shot_service(config).await?;
    service.discover().await;
    Ok(format_players(&service.state()))
}

async fn transport(config: &Config, command: Command) -> CommandResult {
    let service = one_shot_service(config).await?;
    service.discover().await;

    let player = service.send_now(command).await.ok_or(CliError::NoPlayer)?;
    Ok(format!("Sent {command} to {}", player.short_name()))
}

fn schema() -> CommandResult {
    let schema = schemars::schema_for!(Config);
    serde_json::to_string_pretty(&schema).map_err(|e| CliError::Render(e.to_string()))
}

fn show(config: &Config) -> CommandResult {
    toml::to_string_pretty(config).map_err(|e| CliError::Render(e.to_string()))
}
