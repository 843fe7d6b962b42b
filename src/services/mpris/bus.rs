use std::{collections::HashMap, future::Future, time::Duration};

use async_trait::async_trait;
use tokio::time;
use tracing::{instrument, trace};
use zbus::{Connection, fdo, zvariant::OwnedValue};

use super::{
    Command, MediaError, MediaPlayer2PlayerProxy, PLAYER_INTERFACE, PLAYER_PATH, PlayerId,
    PlayerPropertiesProxy,
};

/// Property name to value, as returned by a bulk property read.
pub type PropertyMap = HashMap<String, OwnedValue>;

/// The bus operations the media service depends on.
///
/// Replies are handed back loosely typed; unpacking them into domain values
/// is the pollers' job so malformed payloads can fall back to defaults.
#[async_trait]
pub trait BusClient: Send + Sync {
    /// Every name currently owned on the bus, in bus order.
    ///
    /// # Errors
    /// Returns error if the bus cannot be reached.
    async fn list_names(&self) -> Result<Vec<String>, MediaError>;

    /// The raw `PlaybackStatus` property of `player`.
    ///
    /// # Errors
    /// Returns error if the call fails or the player is gone.
    async fn playback_status(&self, player: &PlayerId) -> Result<OwnedValue, MediaError>;

    /// All properties of the player-control interface of `player`.
    ///
    /// # Errors
    /// Returns error if the call fails or the player is gone.
    async fn player_properties(&self, player: &PlayerId) -> Result<PropertyMap, MediaError>;

    /// Send `command` to `player` without waiting for a reply.
    ///
    /// # Errors
    /// Returns error if the message could not be sent.
    async fn invoke(&self, player: &PlayerId, command: Command) -> Result<(), MediaError>;
}

/// Run one bus call, giving up after `limit`.
///
/// # Errors
/// Returns `MediaError::Timeout` when `limit` elapses first, otherwise the
/// call's own result.
pub async fn with_timeout<T, F>(
    call: &'static str,
    limit: Duration,
    fut: F,
) -> Result<T, MediaError>
where
    F: Future<Output = Result<T, MediaError>>,
{
    match time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_elapsed) => Err(MediaError::Timeout {
            call,
            timeout: limit,
        }),
    }
}

/// [`BusClient`] over a zbus connection.
///
/// Every call is bounded by `call_timeout`, so a player that stops answering
/// turns into an error instead of a reply that never comes.
#[derive(Clone)]
pub struct ZbusClient {
    connection: Connection,
    call_timeout: Duration,
}

impl ZbusClient {
    /// Wrap an existing connection.
    pub fn new(connection: Connection, call_timeout: Duration) -> Self {
        Self {
            connection,
            call_timeout,
        }
    }

    /// Connect to the session bus.
    ///
    /// # Errors
    /// Returns `MediaError::InitializationFailed` if D-Bus connection fails
    pub async fn session(call_timeout: Duration) -> Result<Self, MediaError> {
        let connection = Connection::session().await.map_err(|e| {
            MediaError::InitializationFailed(format!("D-Bus connection failed: {e}"))
        })?;

        Ok(Self::new(connection, call_timeout))
    }

    async fn properties_proxy(
        &self,
        player: &PlayerId,
    ) -> Result<PlayerPropertiesProxy<'static>, MediaError> {
        let proxy = PlayerPropertiesProxy::builder(&self.connection)
            .destination(player.bus_name().to_string())?
            .path(PLAYER_PATH)?
            .build()
            .await?;
        Ok(proxy)
    }

    async fn player_proxy(
        &self,
        player: &PlayerId,
    ) -> Result<MediaPlayer2PlayerProxy<'static>, MediaError> {
        let proxy = MediaPlayer2PlayerProxy::builder(&self.connection)
            .destination(player.bus_name().to_string())?
            .path(PLAYER_PATH)?
            .build()
            .await?;
        Ok(proxy)
    }
}

#[async_trait]
impl BusClient for ZbusClient {
    #[instrument(skip(self))]
    async fn list_names(&self) -> Result<Vec<String>, MediaError> {
        let names = with_timeout("ListNames", self.call_timeout, async {
            let dbus_proxy = fdo::DBusProxy::new(&self.connection).await?;
            Ok::<_, MediaError>(dbus_proxy.list_names().await?)
        })
        .await?;
        trace!(count = names.len(), "Listed bus names");

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    #[instrument(skip(self), fields(bus_name = %player.bus_name()))]
    async fn playback_status(&self, player: &PlayerId) -> Result<OwnedValue, MediaError> {
        with_timeout("Get(PlaybackStatus)", self.call_timeout, async {
            let proxy = self.properties_proxy(player).await?;
            Ok::<_, MediaError>(proxy.get(PLAYER_INTERFACE, "PlaybackStatus").await?)
        })
        .await
    }

    #[instrument(skip(self), fields(bus_name = %player.bus_name()))]
    async fn player_properties(&self, player: &PlayerId) -> Result<PropertyMap, MediaError> {
        with_timeout("GetAll", self.call_timeout, async {
            let proxy = self.properties_proxy(player).await?;
            Ok::<_, MediaError>(proxy.get_all(PLAYER_INTERFACE).await?)
        })
        .await
    }

    #[instrument(skip(self), fields(bus_name = %player.bus_name()))]
    async fn invoke(&self, player: &PlayerId, command: Command) -> Result<(), MediaError> {
        with_timeout(command.method_name(), self.call_timeout, async {
            let proxy = self.player_proxy(player).await?;
            match command {
                Command::Previous => proxy.previous().await?,
                Command::PlayPause => proxy.play_pause().await?,
                Command::Next => proxy.next().await?,
            }
            Ok::<_, MediaError>(())
        })
        .await
    }
}
