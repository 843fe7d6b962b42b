//! Unit tests for config module
//!
//! Tests configuration defaults, parsing, validation and file loading.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, time::Duration};

use tempfile::TempDir;

use crate::{
    NowbarError,
    config::{Config, LogLevel, MediaConfig},
};

#[test]
fn config_default_matches_reference_intervals() {
    let config = Config::default();

    assert_eq!(config.general.log_level, LogLevel::Info);
    assert_eq!(config.media.discovery_interval_ms, 2000);
    assert_eq!(config.media.status_interval_ms, 1000);
    assert_eq!(config.media.metadata_interval_ms, 1500);
    assert_eq!(config.media.call_timeout(), Duration::from_secs(25));
    assert!(config.media.ignored_players.is_empty());
}

#[test]
fn config_deserialize_toml() {
    let toml_str = r#"
        [general]
        log_level = "debug"

        [media]
        ignored_players = ["chromium", "kdeconnect"]
        status_interval_ms = 500
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(
        config.media.ignored_players,
        vec!["chromium".to_string(), "kdeconnect".to_string()]
    );
    assert_eq!(config.media.status_interval_ms, 500);
    assert_eq!(config.media.discovery_interval_ms, 2000);
}

#[test]
fn config_empty_toml_is_default() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_rejects_zero_interval() {
    let toml_str = r#"
        [media]
        metadata_interval_ms = 0
    "#;

    match Config::from_toml_str(toml_str) {
        Err(NowbarError::InvalidConfigField { field, component, .. }) => {
            assert_eq!(field, "metadata_interval_ms");
            assert_eq!(component, "media");
        }
        other => panic!("expected InvalidConfigField, got {other:?}"),
    }
}

#[test]
fn config_rejects_zero_call_timeout() {
    let toml_str = r#"
        [media]
        call_timeout_ms = 0
    "#;

    match Config::from_toml_str(toml_str) {
        Err(NowbarError::InvalidConfigField { field, .. }) => {
            assert_eq!(field, "call_timeout_ms");
        }
        other => panic!("expected InvalidConfigField, got {other:?}"),
    }
}

#[test]
fn media_config_built_in_code_never_yields_zero_periods() {
    let media = MediaConfig {
        discovery_interval_ms: 0,
        status_interval_ms: 0,
        metadata_interval_ms: 0,
        call_timeout_ms: 0,
        ..MediaConfig::default()
    };

    assert_eq!(media.discovery_interval(), Duration::from_millis(1));
    assert_eq!(media.status_interval(), Duration::from_millis(1));
    assert_eq!(media.metadata_interval(), Duration::from_millis(1));
    assert_eq!(media.call_timeout(), Duration::from_millis(1));
}

#[test]
fn config_rejects_unknown_log_level() {
    let toml_str = r#"
        [general]
        log_level = "chatty"
    "#;

    assert!(matches!(
        Config::from_toml_str(toml_str),
        Err(NowbarError::TomlParseError { .. })
    ));
}

#[test]
fn media_config_intervals_as_durations() {
    let media = MediaConfig::default();

    assert_eq!(media.discovery_interval().as_millis(), 2000);
    assert_eq!(media.status_interval().as_millis(), 1000);
    assert_eq!(media.metadata_interval().as_millis(), 1500);
}

#[test]
fn load_from_missing_file_uses_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("does-not-exist.toml");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config, Config::default());
    assert!(!path.exists());
}

#[test]
fn load_from_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[general]
log_level = "trace"

[media]
discovery_interval_ms = 250
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.general.log_level, LogLevel::Trace);
    assert_eq!(config.media.discovery_interval_ms, 250);
}

#[test]
fn load_from_reports_path_on_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[media\nbroken").unwrap();

    match Config::load_from(&path) {
        Err(NowbarError::TomlParseError { location, .. }) => {
            assert!(location.ends_with("config.toml"));
        }
        other => panic!("expected TomlParseError, got {other:?}"),
    }
}

#[test]
fn log_level_display_matches_serde_names() {
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Trace.to_string(), "trace");
    assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
}
