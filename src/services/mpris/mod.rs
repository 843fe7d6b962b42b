/// Bus client abstraction and its zbus implementation
pub mod bus;
/// Transport command dispatch
pub mod control;
/// Media player error types
pub mod error;
/// Track metadata decoding and polling
pub mod metadata;
/// Periodic task plumbing shared by the pollers
pub mod polling;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Player discovery
pub mod registry;
/// Aggregator service tying the pollers together
pub mod service;
/// Aggregate state snapshot
pub mod state;
/// Playback status polling
pub mod status;
/// Player identifiers, playback states and commands
pub mod types;


pub use bus::*;
pub use control::*;
pub use error::*;
pub use metadata::MetadataPoller;
pub use proxy::*;
pub use registry::*;
pub use service::*;
pub use state::*;
pub use status::*;
pub use types::*;
