//! Formatting utilities for CLI output.

use crate::services::mpris::{MediaState, PlaybackState};

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";
    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
}

/// Formats error messages with styling
pub fn format_error(text: &str) -> String {
    format!("{}{}Error:{} {}", Colors::BOLD, Colors::RED, Colors::RESET, text)
}

/// One-line rendering of a state snapshot, as a panel would show it.
///
/// Hidden state renders as an empty string. Otherwise the play/pause glyph,
/// then the marquee text if playing or the tooltip text dimmed if not, then
/// the active player's short name.
pub fn format_state(state: &MediaState) -> String {
    let Some(player) = state.active_player() else {
        return String::new();
    };

    let glyph = state.playback_state.glyph();
    let text = match state.playback_state {
        PlaybackState::Playing => state.marquee_text.clone(),
        PlaybackState::Paused | PlaybackState::Unknown if !state.tooltip_text.is_empty() => {
            format!("{}{}{}", Colors::DIM, state.tooltip_text, Colors::RESET)
        }
        PlaybackState::Paused | PlaybackState::Unknown => String::new(),
    };

    if text.is_empty() {
        format!("{glyph} [{}]", player.short_name())
    } else {
        format!("{glyph} {text} [{}]", player.short_name())
    }
}

/// List of discovered players, the active one marked.
pub fn format_players(state: &MediaState) -> String {
    if state.players.is_empty() {
        return "No media players found".to_string();
    }

    state
        .players
        .iter()
        .enumerate()
        .map(|(index, player)| {
            if index == 0 {
                format!("{}* {player}{} (active)", Colors::GREEN, Colors::RESET)
            } else {
                format!("  {player}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
