use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use zbus::zvariant::{OwnedValue, Value};

use super::{
    BusClient, MediaError, PlaybackState, SharedState, metadata::unwrap_variant, polling::Poller,
};

/// Polls the active player's `PlaybackStatus`.
///
/// On a failed call the previously stored state is kept, so a flaky player
/// does not make the play button flicker. The metadata poller clears its
/// text on failure instead; the two policies differ on purpose.
pub struct StatusPoller {
    bus: Arc<dyn BusClient>,
    state: SharedState,
    alive: CancellationToken,
}

impl StatusPoller {
    /// Create a poller writing into `state`.
    pub fn new(bus: Arc<dyn BusClient>, state: SharedState, alive: CancellationToken) -> Self {
        Self { bus, state, alive }
    }

    /// Run one status cycle and return the playback state now stored.
    ///
    /// Without an active player this stores `Unknown` and makes no bus call.
    #[instrument(skip(self))]
    pub async fn poll_status(&self) -> PlaybackState {
        let Some(player) = self.state.active_player() else {
            if !self.alive.is_cancelled() {
                self.state.set_playback_state(PlaybackState::Unknown);
            }
            return PlaybackState::Unknown;
        };

        match self.bus.playback_status(&player).await {
            Ok(reply) => {
                let playback_state = decode_playback_status(&reply);
                if self.alive.is_cancelled() {
                    return self.state.playback_state();
                }

                if !self.state.set_playback_state_for(&player, playback_state) {
                    debug!(%player, "Player no longer active, dropping status reply");
                    return self.state.playback_state();
                }

                debug!(%player, %playback_state, "Playback status polled");
                playback_state
            }
            Err(e) => {
                warn!(%player, "Playback status query failed, keeping previous state: {e}");
                self.state.playback_state()
            }
        }
    }
}

/// Map a raw `PlaybackStatus` reply to a [`PlaybackState`].
///
/// Only the string `"Playing"` means playing; anything else, including a
/// reply that is not a string at all, counts as paused.
pub fn decode_playback_status(reply: &OwnedValue) -> PlaybackState {
    match playback_status_text(reply) {
        Ok(status) => PlaybackState::from(status),
        Err(e) => {
            debug!("{e}, treating as paused");
            PlaybackState::Paused
        }
    }
}

pub(crate) fn playback_status_text(reply: &OwnedValue) -> Result<&str, MediaError> {
    match unwrap_variant(reply) {
        Value::Str(status) => Ok(status.as_str()),
        other => Err(MediaError::MalformedReply {
            call: "Get(PlaybackStatus)",
            details: format!("expected a string, got {other:?}"),
        }),
    }
}

#[async_trait]
impl Poller for StatusPoller {
    fn name(&self) -> &'static str {
        "status"
    }

    async fn poll(&self) {
        self.poll_status().await;
    }
}
