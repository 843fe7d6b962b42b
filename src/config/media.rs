use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Media service configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// List of player bus name patterns to ignore during discovery
    pub ignored_players: Vec<String>,

    /// Milliseconds between player discovery cycles.
    pub discovery_interval_ms: u64,

    /// Milliseconds between playback status polls of the active player.
    pub status_interval_ms: u64,

    /// Milliseconds between metadata polls of the active player.
    pub metadata_interval_ms: u64,

    /// Milliseconds a single bus call may take before it counts as failed.
    pub call_timeout_ms: u64,
}

/// Shortest period or timeout handed to the runtime. Zero is never valid
/// there, and a config built in code skips validation.
const MIN_PERIOD: Duration = Duration::from_millis(1);

fn millis(value: u64) -> Duration {
    Duration::from_millis(value).max(MIN_PERIOD)
}

impl MediaConfig {
    /// Period of the discovery cycle.
    pub fn discovery_interval(&self) -> Duration {
        millis(self.discovery_interval_ms)
    }

    /// Period of the status cycle.
    pub fn status_interval(&self) -> Duration {
        millis(self.status_interval_ms)
    }

    /// Period of the metadata cycle.
    pub fn metadata_interval(&self) -> Duration {
        millis(self.metadata_interval_ms)
    }

    /// Upper bound on a single bus call.
    pub fn call_timeout(&self) -> Duration {
        millis(self.call_timeout_ms)
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            ignored_players: Vec::new(),
            discovery_interval_ms: 2000,
            status_interval_ms: 1000,
            metadata_interval_ms: 1500,
            call_timeout_ms: 25_000,
        }
    }
}
