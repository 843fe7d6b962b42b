#![allow(missing_docs)]

use std::collections::HashMap;

use zbus::{Result, proxy, zvariant::OwnedValue};

/// Properties interface of an MPRIS player object
///
/// Queried by bulk and single reads rather than through cached properties,
/// so every poll sees the player's current values.
#[proxy(
    interface = "org.freedesktop.DBus.Properties",
    default_service = "org.mpris.MediaPlayer2",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait PlayerProperties {
    /// Read one property of `interface_name`
    fn get(&self, interface_name: &str, property_name: &str) -> Result<OwnedValue>;

    /// Read every property of `interface_name`
    fn get_all(&self, interface_name: &str) -> Result<HashMap<String, OwnedValue>>;
}

/// MPRIS MediaPlayer2.Player transport methods
///
/// All three are sent with the no-reply flag: the call returns once the
/// message is queued and the player's answer, if any, is discarded.
#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_service = "org.mpris.MediaPlayer2",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait MediaPlayer2Player {
    /// Toggle play/pause state
    #[zbus(no_reply)]
    fn play_pause(&self) -> Result<()>;

    /// Skip to next track
    #[zbus(no_reply)]
    fn next(&self) -> Result<()>;

    /// Skip to previous track
    #[zbus(no_reply)]
    fn previous(&self) -> Result<()>;
}
