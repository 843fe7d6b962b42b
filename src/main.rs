//! nowbar - media player status and control over MPRIS.

use std::{error::Error, process};

use clap::Parser;
use nowbar::{
    cli::{self, Cli, formatting::format_error},
    config::Config,
    tracing_config,
};
use tracing::debug;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    tracing_config::init(config.general.log_level)?;
    debug!(?config, "Configuration loaded");

    match cli::execute(&args.command, &config).await {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
