//! nowbar - media player status and control over MPRIS.
//!
//! nowbar discovers media players on the D-Bus session bus, tracks the
//! active player's playback state and current track, and forwards transport
//! commands to it. The main pieces are:
//!
//! - Periodic discovery, status and metadata pollers
//! - An observable state snapshot for panels and widgets to render
//! - Fire-and-forget previous / play-pause / next commands
//! - TOML configuration and a small CLI front end
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use nowbar::{config::MediaConfig, services::MediaService};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let service = MediaService::start(&MediaConfig::default()).await?;
//! let mut states = Box::pin(service.watch());
//!
//! while let Some(state) = states.next().await {
//!     println!("{} {}", state.playback_state.glyph(), state.marquee_text);
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line front end.
pub mod cli;

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reactive services for system integration.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{NowbarError, Result};
