use std::time::Duration;

/// Errors that can occur during media operations
///
/// None of these reach the presentation layer from the pollers: each poller
/// logs the failure and degrades to its documented default.
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// D-Bus communication error (bus unreachable, player gone)
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// The player did not answer within the call timeout
    #[error("{call} timed out after {timeout:?}")]
    Timeout {
        /// Bus call that got no reply
        call: &'static str,
        /// How long the call was allowed to take
        timeout: Duration,
    },

    /// The reply arrived but its payload could not be unpacked
    #[error("Malformed reply to {call}: {details}")]
    MalformedReply {
        /// Bus call whose reply was malformed
        call: &'static str,
        /// What was wrong with the payload
        details: String,
    },

    /// Failed to initialize the media service
    #[error("Failed to initialize media service: {0}")]
    InitializationFailed(String),
}

impl From<zbus::fdo::Error> for MediaError {
    fn from(error: zbus::fdo::Error) -> Self {
        Self::DbusError(error.into())
    }
}
