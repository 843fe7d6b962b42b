use std::{fs, io::ErrorKind, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{NowbarError, Result};

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file yields the default configuration; nothing is written
    /// to disk.
    ///
    /// # Errors
    /// Returns error if the config directory cannot be determined, or the file
    /// exists but cannot be read, parsed or validated.
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load_from(&path)
    }

    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, contains invalid TOML or
    /// fails validation.
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(NowbarError::io(e, path)),
        };

        let config: Config =
            toml::from_str(&content).map_err(|e| NowbarError::toml_parse(e, Some(path)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| NowbarError::toml_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the pollers cannot run with.
    ///
    /// # Errors
    /// Returns `InvalidConfigField` for a zero polling interval or call timeout.
    pub fn validate(&self) -> Result<()> {
        let intervals = [
            ("discovery_interval_ms", self.media.discovery_interval_ms),
            ("status_interval_ms", self.media.status_interval_ms),
            ("metadata_interval_ms", self.media.metadata_interval_ms),
            ("call_timeout_ms", self.media.call_timeout_ms),
        ];

        for (field, value) in intervals {
            if value == 0 {
                return Err(NowbarError::InvalidConfigField {
                    field: field.to_string(),
                    component: "media".to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        Ok(())
    }
}
