use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{
    task::{JoinHandle, JoinSet},
    time,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// One fixed-interval refresh of a slice of the media state.
#[async_trait]
pub trait Poller: Send + Sync + 'static {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Perform one bus round trip and store its outcome.
    ///
    /// Must not fail: every error is logged and mapped to the poller's
    /// fallback value.
    async fn poll(&self);
}

/// Run `poller` every `period` until `alive` is cancelled.
///
/// The first poll happens immediately. Each tick runs its round trip on its
/// own task, so a slow bus can have several polls of the same kind in flight;
/// whichever completes last wins. Those tasks belong to the loop: stopping or
/// aborting it aborts every poll still waiting on the bus.
pub fn spawn_periodic<P: Poller>(
    poller: Arc<P>,
    period: Duration,
    alive: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                _ = alive.cancelled() => {
                    debug!(poller = poller.name(), "Polling stopped");
                    break;
                }
                _ = ticker.tick() => {
                    while in_flight.try_join_next().is_some() {}
                    trace!(poller = poller.name(), in_flight = in_flight.len(), "Poll tick");
                    let poller = Arc::clone(&poller);
                    in_flight.spawn(async move { poller.poll().await });
                }
            }
        }

        in_flight.abort_all();
    })
}
