use std::sync::Arc;

use futures::Stream;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

use super::{
    BusClient, Command, CommandDispatcher, MediaError, MediaState, MetadataPoller,
    PlayerId, PlayerRegistry, SharedState, StatusPoller, ZbusClient, polling::spawn_periodic,
};
use crate::config::MediaConfig;

/// Media player status aggregator.
///
/// Runs three periodic pollers against the bus (discovery, playback status,
/// metadata) and exposes the resulting [`MediaState`] as a snapshot and as a
/// stream, plus [`send`](Self::send) for transport commands.
pub struct MediaService {
    state: SharedState,
    registry: Arc<PlayerRegistry>,
    status: Arc<StatusPoller>,
    metadata: Arc<MetadataPoller>,
    dispatcher: CommandDispatcher,
    alive: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl MediaService {
    /// Connect to the session bus and start polling.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::InitializationFailed` if D-Bus connection fails
    #[instrument(skip(config))]
    pub async fn start(config: &MediaConfig) -> Result<Self, MediaError> {
        info!("Starting media service");
        let bus = ZbusClient::session(config.call_timeout()).await?;
        Ok(Self::with_bus(Arc::new(bus), config))
    }

    /// Start polling over an existing bus client.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_bus(bus: Arc<dyn BusClient>, config: &MediaConfig) -> Self {
        let mut service = Self::idle(bus, config);

        service.tasks = vec![
            spawn_periodic(
                Arc::clone(&service.registry),
                config.discovery_interval(),
                service.alive.clone(),
            ),
            spawn_periodic(
                Arc::clone(&service.status),
                config.status_interval(),
                service.alive.clone(),
            ),
            spawn_periodic(
                Arc::clone(&service.metadata),
                config.metadata_interval(),
                service.alive.clone(),
            ),
        ];

        service
    }

    /// Build the service without starting the periodic tasks.
    ///
    /// State only changes through [`refresh`](Self::refresh).
    pub fn idle(bus: Arc<dyn BusClient>, config: &MediaConfig) -> Self {
        let state = SharedState::new();
        let alive = CancellationToken::new();

        let registry = PlayerRegistry::new(
            Arc::clone(&bus),
            state.clone(),
            config.ignored_players.clone(),
            alive.clone(),
        );
        let status = StatusPoller::new(Arc::clone(&bus), state.clone(), alive.clone());
        let metadata = MetadataPoller::new(Arc::clone(&bus), state.clone(), alive.clone());
        let dispatcher = CommandDispatcher::new(bus, state.clone());

        Self {
            state,
            registry: Arc::new(registry),
            status: Arc::new(status),
            metadata: Arc::new(metadata),
            dispatcher,
            alive,
            tasks: Vec::new(),
        }
    }

    /// Run one discovery cycle.
    pub async fn discover(&self) -> Vec<PlayerId> {
        self.registry.refresh().await
    }

    /// Run one discovery, status and metadata cycle in that order.
    ///
    /// Useful for one-shot queries where waiting for the timers is pointless.
    pub async fn refresh(&self) -> MediaState {
        self.registry.refresh().await;
        self.status.poll_status().await;
        self.metadata.poll_metadata().await;
        self.state()
    }

    /// Current state snapshot.
    pub fn state(&self) -> MediaState {
        self.state.get()
    }

    /// Stream of state snapshots, starting with the current one.
    pub fn watch(&self) -> impl Stream<Item = MediaState> + Send + use<> {
        self.state.property().watch()
    }

    /// The active player, if any.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.state.active_player()
    }

    /// Send a transport command to the active player.
    ///
    /// Returns immediately; does nothing when no player is known.
    pub fn send(&self, command: Command) -> Option<PlayerId> {
        self.dispatcher.send(command)
    }

    /// Send a transport command and wait until it has been handed to the bus.
    pub async fn send_now(&self, command: Command) -> Option<PlayerId> {
        self.dispatcher.send_now(command).await
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.alive.is_cancelled()
    }

    /// Stop all polling.
    ///
    /// Aborts the periodic loops together with every round trip still
    /// waiting on the bus; nothing writes to the state afterwards.
    pub fn shutdown(&mut self) {
        self.alive.cancel();
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for MediaService {
    fn drop(&mut self) {
        self.shutdown();
    }
}
