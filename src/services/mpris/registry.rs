use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::{BusClient, PlayerId, SharedState, polling::Poller};

/// Discovers MPRIS players and keeps the ordered player list current.
pub struct PlayerRegistry {
    bus: Arc<dyn BusClient>,
    state: SharedState,
    ignored_players: Vec<String>,
    alive: CancellationToken,
}

impl PlayerRegistry {
    /// Create a registry writing into `state`.
    ///
    /// Bus names containing any of `ignored_players` are left out.
    pub fn new(
        bus: Arc<dyn BusClient>,
        state: SharedState,
        ignored_players: Vec<String>,
        alive: CancellationToken,
    ) -> Self {
        Self {
            bus,
            state,
            ignored_players,
            alive,
        }
    }

    /// Run one discovery cycle and return the player list now stored.
    ///
    /// The list is replaced wholesale with the MPRIS names the bus reports,
    /// in the order the bus reports them. If the bus call fails the previous
    /// list is kept: a transient failure is "no change", not "no players".
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Vec<PlayerId> {
        match self.bus.list_names().await {
            Ok(names) => {
                let players = self.select_players(names);
                if self.alive.is_cancelled() {
                    return self.state.get().players;
                }

                let previous = self.state.get().players;
                if previous != players {
                    info!(count = players.len(), active = ?players.first(), "Player list changed");
                }
                self.state.replace_players(players.clone());
                players
            }
            Err(e) => {
                warn!("Player discovery failed, keeping previous list: {e}");
                self.state.get().players
            }
        }
    }

    /// Check if a player should be ignored based on its bus name
    pub fn should_ignore_player(&self, bus_name: &str) -> bool {
        self.ignored_players
            .iter()
            .any(|pattern| bus_name.contains(pattern.as_str()))
    }

    fn select_players(&self, names: Vec<String>) -> Vec<PlayerId> {
        let mut players: Vec<PlayerId> = Vec::new();

        for name in names {
            if !PlayerId::is_player_name(&name) {
                continue;
            }
            if self.should_ignore_player(&name) {
                debug!(bus_name = %name, "Ignoring player based on configuration");
                continue;
            }

            let player_id = PlayerId::from_bus_name(&name);
            if !players.contains(&player_id) {
                players.push(player_id);
            }
        }

        players
    }
}

#[async_trait]
impl Poller for PlayerRegistry {
    fn name(&self) -> &'static str {
        "discovery"
    }

    async fn poll(&self) {
        self.refresh().await;
    }
}
