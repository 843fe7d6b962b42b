use std::sync::Arc;

use tracing::{debug, instrument};

use super::{BusClient, Command, PlayerId, SharedState};

/// Forwards transport commands to the active player.
///
/// Commands are fire-and-forget: nothing waits for the player, failures are
/// logged and dropped, and a lost command is not retried.
#[derive(Clone)]
pub struct CommandDispatcher {
    bus: Arc<dyn BusClient>,
    state: SharedState,
}

impl CommandDispatcher {
    /// Create a dispatcher reading the active player from `state`.
    pub fn new(bus: Arc<dyn BusClient>, state: SharedState) -> Self {
        Self { bus, state }
    }

    /// Send `command` to the active player without blocking the caller.
    ///
    /// Does nothing, and makes no bus call, when no player is known.
    /// Must be called from within a tokio runtime.
    ///
    /// Returns the player the command was addressed to, if any.
    pub fn send(&self, command: Command) -> Option<PlayerId> {
        let player = self.state.active_player()?;

        let dispatcher = self.clone();
        let target = player.clone();
        tokio::spawn(async move { dispatcher.dispatch(target, command).await });

        Some(player)
    }

    /// Send `command` to the active player and wait until it is on the bus.
    ///
    /// Still does not wait for the player to answer. For short-lived callers
    /// that would otherwise exit before a spawned send runs.
    pub async fn send_now(&self, command: Command) -> Option<PlayerId> {
        let player = self.state.active_player()?;
        self.dispatch(player.clone(), command).await;
        Some(player)
    }

    #[instrument(skip(self), fields(bus_name = %player.bus_name()))]
    async fn dispatch(&self, player: PlayerId, command: Command) {
        match self.bus.invoke(&player, command).await {
            Ok(()) => debug!("Command sent"),
            Err(e) => debug!("Command dropped: {e}"),
        }
    }
}
