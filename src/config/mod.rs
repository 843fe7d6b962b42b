//! Configuration schema definitions and loading.
//!
//! Defines the configuration structure for nowbar: general settings such as
//! the log level, and the media section controlling discovery and polling.
//! All configurations are deserializable from TOML.

mod general;
mod loading;
mod media;
mod paths;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use media::MediaConfig;
pub use paths::ConfigPaths;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for nowbar.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Media player discovery and polling settings.
    #[serde(default)]
    pub media: MediaConfig,
}
