//! Shared permit counter

use parking_lot::Mutex;
use tokio::sync::Notify;

/// Permit counter shared by a limiter and its replenishment task.
///
/// Decrement and reset happen under the same lock, so the counter always lies
/// in `0..=request_limit`.
#[derive(Debug)]
pub(super) struct PermitState {
    available: Mutex<u32>,
    request_limit: u32,
    /// Signalled after every reset
    replenished: Notify,
}

impl PermitState {
    /// Create a full counter
    pub fn new(request_limit: u32) -> Self {
        Self {
            available: Mutex::new(request_limit),
            request_limit,
            replenished: Notify::new(),
        }
    }

    /// Take one permit if any is left
    pub fn try_take(&self) -> bool {
        let mut available = self.available.lock();
        if *available > 0 {
            *available -= 1;
            true
        } else {
            false
        }
    }

    /// Restore full capacity and wake every waiter.
    ///
    /// Returns how many permits had been consumed since the previous reset.
    pub fn reset(&self) -> u32 {
        let consumed = {
            let mut available = self.available.lock();
            let consumed = self.request_limit - *available;
            *available = self.request_limit;
            consumed
        };
        self.replenished.notify_waiters();
        consumed
    }

    /// Permits left in the current window
    pub fn available(&self) -> u32 {
        *self.available.lock()
    }

    /// Wait until a permit is taken.
    ///
    /// The wake-up is registered before the counter is checked, so a reset
    /// landing between the check and the sleep is never missed. Dropping this
    /// future never consumes a permit: the take and the return happen in the
    /// same poll.
    pub async fn take(&self) {
        loop {
            let notified = self.replenished.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.try_take() {
                return;
            }
            notified.await;
        }
    }
}
