use std::fmt;

/// Bus name prefix reserved for MPRIS media players.
pub const PLAYER_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Object path every MPRIS player exports its interfaces on.
pub const PLAYER_PATH: &str = "/org/mpris/MediaPlayer2";

/// Player-control interface carrying status, metadata and transport methods.
pub const PLAYER_INTERFACE: &str = "org.mpris.MediaPlayer2.Player";

/// Unique identifier for a media player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a PlayerId from a D-Bus bus name
    pub fn from_bus_name(bus_name: &str) -> Self {
        Self(bus_name.to_string())
    }

    /// Get the D-Bus bus name
    pub fn bus_name(&self) -> &str {
        &self.0
    }

    /// Bus name without the MPRIS prefix, e.g. `vlc` or `spotify`.
    pub fn short_name(&self) -> &str {
        self.0.strip_prefix(PLAYER_PREFIX).unwrap_or(&self.0)
    }

    /// Whether a bus name belongs to an MPRIS player.
    pub fn is_player_name(bus_name: &str) -> bool {
        bus_name.starts_with(PLAYER_PREFIX)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current playback state of the active player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused or stopped
    Paused,

    /// No active player, or the state has not been read yet
    #[default]
    Unknown,
}

impl PlaybackState {
    /// Label for the play/pause button: a pause glyph while playing, a play
    /// glyph otherwise.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Playing => "❚❚",
            Self::Paused | Self::Unknown => "▶",
        }
    }
}

impl From<&str> for PlaybackState {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            _ => Self::Paused,
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Title and artist of the active player's current track
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackInfo {
    /// Track title, empty when unknown
    pub title: String,

    /// First listed artist, empty when unknown
    pub artist: String,
}

impl TrackInfo {
    /// Create track info from a title and artist
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Text shown for this track.
    ///
    /// `"artist – title"` when both are known, otherwise whichever one is
    /// known, otherwise empty.
    pub fn display_text(&self) -> String {
        match (self.artist.is_empty(), self.title.is_empty()) {
            (false, false) => format!("{} – {}", self.artist, self.title),
            (true, false) => self.title.clone(),
            (false, true) => self.artist.clone(),
            (true, true) => String::new(),
        }
    }
}

/// Transport commands forwarded to the active player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Go to previous track
    Previous,

    /// Toggle play/pause
    PlayPause,

    /// Skip to next track
    Next,
}

impl Command {
    /// D-Bus method name on the player-control interface
    pub fn method_name(self) -> &'static str {
        match self {
            Self::Previous => "Previous",
            Self::PlayPause => "PlayPause",
            Self::Next => "Next",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
