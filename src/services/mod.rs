/// Shared reactive primitives
pub mod common;
/// MPRIS media player status and control
pub mod mpris;

pub use mpris::{Command, MediaService, MediaState, PlaybackState, PlayerId, TrackInfo};
