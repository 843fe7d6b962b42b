use super::{PlaybackState, PlayerId, TrackInfo};
use crate::services::common::Property;

/// Snapshot of everything the presentation layer renders.
///
/// Each poller owns a disjoint set of fields:
/// - discovery writes `players`
/// - status writes `playback_state`
/// - metadata writes `track`, `tooltip_text` and `marquee_text`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaState {
    /// Discovered players in bus order, deduplicated
    pub players: Vec<PlayerId>,

    /// Playback state of the active player
    pub playback_state: PlaybackState,

    /// Current track of the active player
    pub track: TrackInfo,

    /// Track text, shown whatever the playback state
    pub tooltip_text: String,

    /// Track text while playing, empty otherwise
    pub marquee_text: String,
}

impl MediaState {
    /// The player targeted for display and commands.
    ///
    /// The first discovered player wins. Bus enumeration order decides ties,
    /// and with several players running only one is ever controlled.
    pub fn active_player(&self) -> Option<&PlayerId> {
        self.players.first()
    }

    /// Whether any player is available, i.e. whether controls should show.
    pub fn visible(&self) -> bool {
        !self.players.is_empty()
    }
}

/// Shared, observable [`MediaState`].
///
/// Every write is a read-modify-write of the whole snapshot, so readers never
/// observe a half-applied update.
#[derive(Clone, Debug)]
pub struct SharedState {
    inner: Property<MediaState>,
}

impl SharedState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub fn get(&self) -> MediaState {
        self.inner.get()
    }

    /// Active player of the current snapshot.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.inner.get().active_player().cloned()
    }

    /// Current playback state.
    pub fn playback_state(&self) -> PlaybackState {
        self.inner.get().playback_state
    }

    /// Underlying property, for watching.
    pub fn property(&self) -> &Property<MediaState> {
        &self.inner
    }

    pub(crate) fn replace_players(&self, players: Vec<PlayerId>) {
        self.inner.update(|state| state.players = players);
    }

    pub(crate) fn set_playback_state(&self, playback_state: PlaybackState) {
        self.inner
            .update(|state| state.playback_state = playback_state);
    }

    /// Store the playback state of `player` if it is still the active one.
    ///
    /// Returns `false`, leaving the snapshot untouched, when discovery has
    /// moved on while the reply was in flight.
    pub(crate) fn set_playback_state_for(
        &self,
        player: &PlayerId,
        playback_state: PlaybackState,
    ) -> bool {
        let mut stored = false;
        self.inner.update(|state| {
            if state.active_player() == Some(player) {
                state.playback_state = playback_state;
                stored = true;
            }
        });
        stored
    }

    /// Store `track` and derive both texts, gating the marquee on the
    /// playback state as it is at this moment.
    pub(crate) fn set_track(&self, track: TrackInfo) {
        self.inner.update(|state| apply_track(state, track));
    }

    /// [`set_track`](Self::set_track) for a reply from `player`, dropped
    /// when `player` is no longer active.
    pub(crate) fn set_track_for(&self, player: &PlayerId, track: TrackInfo) -> bool {
        let mut stored = false;
        self.inner.update(|state| {
            if state.active_player() == Some(player) {
                apply_track(state, track);
                stored = true;
            }
        });
        stored
    }

    pub(crate) fn clear_track(&self) {
        self.set_track(TrackInfo::default());
    }
}

fn apply_track(state: &mut MediaState, track: TrackInfo) {
    let text = track.display_text();
    state.marquee_text = if state.playback_state == PlaybackState::Playing {
        text.clone()
    } else {
        String::new()
    };
    state.tooltip_text = text;
    state.track = track;
}

impl Default for SharedState {
    fn default() -> Self {
        Self {
            inner: Property::new(MediaState::default()),
        }
    }
}
