use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use zbus::zvariant::{OwnedValue, Value};

use super::{BusClient, PropertyMap, SharedState, TrackInfo, polling::Poller};

/// Peel nested variant wrappers off a value.
pub fn unwrap_variant<'a, 'v>(mut value: &'a Value<'v>) -> &'a Value<'v> {
    while let Value::Value(inner) = value {
        value = &**inner;
    }
    value
}

fn into_unwrapped(value: Value<'_>) -> Value<'_> {
    match value {
        Value::Value(inner) => into_unwrapped(*inner),
        other => other,
    }
}

fn string_value(value: &Value<'_>) -> Option<String> {
    match unwrap_variant(value) {
        Value::Str(s) => Some(s.as_str().to_owned()),
        _ => None,
    }
}

fn first_artist(value: &Value<'_>) -> Option<String> {
    match unwrap_variant(value) {
        Value::Array(artists) => artists.iter().next().and_then(string_value),
        Value::Str(s) => Some(s.as_str().to_owned()),
        _ => None,
    }
}

fn metadata_map(properties: &mut PropertyMap) -> Option<HashMap<String, OwnedValue>> {
    let metadata = properties.remove("Metadata")?;
    match into_unwrapped(Value::from(metadata)) {
        Value::Dict(dict) => HashMap::<String, OwnedValue>::try_from(dict).ok(),
        _ => None,
    }
}

impl TrackInfo {
    /// Decode title and artist from a bulk read of the player interface.
    ///
    /// Never fails: a missing `Metadata` entry, a missing field or a field of
    /// the wrong type all yield empty strings. The artist is the first entry
    /// of `xesam:artist`; a plain string is accepted as well.
    pub fn from_properties(mut properties: PropertyMap) -> Self {
        let Some(metadata) = metadata_map(&mut properties) else {
            return Self::default();
        };

        let title = metadata
            .get("xesam:title")
            .and_then(|title| string_value(title))
            .unwrap_or_default();

        let artist = metadata
            .get("xesam:artist")
            .and_then(|artist| first_artist(artist))
            .unwrap_or_default();

        Self { title, artist }
    }
}

/// Polls the active player's metadata and derives the track texts.
///
/// A failed call clears the texts, unlike [`StatusPoller`](super::StatusPoller)
/// which keeps its last value.
pub struct MetadataPoller {
    bus: Arc<dyn BusClient>,
    state: SharedState,
    alive: CancellationToken,
}

impl MetadataPoller {
    /// Create a poller writing into `state`.
    pub fn new(bus: Arc<dyn BusClient>, state: SharedState, alive: CancellationToken) -> Self {
        Self { bus, state, alive }
    }

    /// Run one metadata cycle and return `(tooltip_text, marquee_text)`.
    ///
    /// The marquee is gated on the playback state the status poller last
    /// stored, so it may lag one status cycle behind. Without an active player
    /// both texts are cleared and no bus call is made.
    #[instrument(skip(self))]
    pub async fn poll_metadata(&self) -> (String, String) {
        let Some(player) = self.state.active_player() else {
            if !self.alive.is_cancelled() {
                self.state.clear_track();
            }
            return self.texts();
        };

        let track = match self.bus.player_properties(&player).await {
            Ok(properties) => {
                let track = TrackInfo::from_properties(properties);
                debug!(%player, title = %track.title, artist = %track.artist, "Metadata polled");
                track
            }
            Err(e) => {
                warn!(%player, "Metadata query failed, clearing track text: {e}");
                TrackInfo::default()
            }
        };

        if !self.alive.is_cancelled() && !self.state.set_track_for(&player, track) {
            debug!(%player, "Player no longer active, dropping metadata reply");
        }

        self.texts()
    }

    fn texts(&self) -> (String, String) {
        let state = self.state.get();
        (state.tooltip_text, state.marquee_text)
    }
}

#[async_trait]
impl Poller for MetadataPoller {
    fn name(&self) -> &'static str {
        "metadata"
    }

    async fn poll(&self) {
        self.poll_metadata().await;
    }
}
