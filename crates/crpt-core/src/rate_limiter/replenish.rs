//! Periodic capacity reset

use super::state::PermitState;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Reset `state` to full capacity once per `window` until `shutdown` fires.
///
/// The first reset happens one full window after the task starts.
pub(super) async fn run(state: Arc<PermitState>, window: Duration, shutdown: CancellationToken) {
    let mut ticker = interval_at(Instant::now() + window, window);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                debug!("Rate limiter: replenishment stopped");
                break;
            }
            _ = ticker.tick() => {
                let consumed = state.reset();
                trace!(consumed, "Rate limiter: window elapsed, capacity reset");
            }
        }
    }
}
