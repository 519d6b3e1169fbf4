//! Time-window rate limiter

use super::replenish;
use super::state::PermitState;
use crate::config::RateLimitConfig;
use crate::error::{SubmitError, SubmitResult};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Rate limiter handing out at most `request_limit` permits per window
///
/// Capacity starts full. A background task owned by this limiter resets it to
/// exactly `request_limit` at the end of every window, whatever was consumed.
/// Across a window boundary up to `2 × request_limit` calls can therefore go
/// through in quick succession; this is a periodic reset, not a sliding window.
///
/// Cloning this struct shares the underlying state, so clones coordinate
/// together. The replenishment task stops on `shutdown()` or when the last
/// clone is dropped.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: RateLimitConfig,
    state: Arc<PermitState>,
    /// Stops the replenishment task
    shutdown: CancellationToken,
    /// Fired and replaced by `interrupt()`; waiters hold a clone of the current one
    interrupt: Mutex<CancellationToken>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

impl RateLimiter {
    /// Create a limiter allowing `request_limit` permits per `window`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `request_limit` is zero, `window` is
    /// zero, or no Tokio runtime is available to drive replenishment.
    pub fn new(window: Duration, request_limit: u32) -> SubmitResult<Self> {
        Self::with_config(RateLimitConfig::new(window, request_limit))
    }

    /// Create a limiter from a configuration
    pub fn with_config(config: RateLimitConfig) -> SubmitResult<Self> {
        config.validate()?;

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            SubmitError::configuration(format!(
                "Rate limiter requires a Tokio runtime for replenishment: {}",
                e
            ))
        })?;

        let state = Arc::new(PermitState::new(config.request_limit));
        let shutdown = CancellationToken::new();
        runtime.spawn(replenish::run(
            Arc::clone(&state),
            config.window,
            shutdown.clone(),
        ));

        debug!(
            "Created rate limiter: {} permits per {:?}",
            config.request_limit, config.window
        );

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                state,
                shutdown,
                interrupt: Mutex::new(CancellationToken::new()),
            }),
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &RateLimitConfig {
        &self.inner.config
    }

    /// Maximum permits per window
    pub fn request_limit(&self) -> u32 {
        self.inner.config.request_limit
    }

    /// Length of one window
    pub fn window(&self) -> Duration {
        self.inner.config.window
    }

    /// Permits left in the current window
    pub fn available_permits(&self) -> u32 {
        self.inner.state.available()
    }

    /// Wait for a permit and consume it
    ///
    /// There is no timeout. The wait ends with an `Interrupted` error only if
    /// `interrupt()` is called while it is blocked; an interrupted wait never
    /// consumes a permit.
    pub async fn acquire(&self) -> SubmitResult<()> {
        let interrupt = self.current_interrupt();
        let start = Instant::now();

        tokio::select! {
            biased;
            _ = interrupt.cancelled() => Err(Self::interrupted_error(start)),
            _ = self.inner.state.take() => {
                self.log_acquired(start);
                Ok(())
            }
        }
    }

    /// Wait for a permit unless `token` is cancelled first
    pub async fn acquire_cancellable(&self, token: &CancellationToken) -> SubmitResult<()> {
        let interrupt = self.current_interrupt();
        let start = Instant::now();

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(SubmitError::interrupted(
                "Permit wait cancelled by caller",
            )
            .with_context(format!("waited {:?}", start.elapsed()))),
            _ = interrupt.cancelled() => Err(Self::interrupted_error(start)),
            _ = self.inner.state.take() => {
                self.log_acquired(start);
                Ok(())
            }
        }
    }

    /// Wait at most `timeout` for a permit
    pub async fn acquire_timeout(&self, timeout: Duration) -> SubmitResult<()> {
        let interrupt = self.current_interrupt();
        let start = Instant::now();

        tokio::select! {
            biased;
            _ = interrupt.cancelled() => Err(Self::interrupted_error(start)),
            _ = self.inner.state.take() => {
                self.log_acquired(start);
                Ok(())
            }
            _ = tokio::time::sleep(timeout) => Err(SubmitError::timeout(start.elapsed())),
        }
    }

    /// Take a permit without waiting
    ///
    /// Returns true if a permit was consumed.
    pub fn try_acquire(&self) -> bool {
        self.inner.state.try_take()
    }

    /// Fail every wait currently blocked in this limiter with `Interrupted`
    ///
    /// Waits started afterwards are unaffected.
    pub fn interrupt(&self) {
        let fired = std::mem::replace(&mut *self.inner.interrupt.lock(), CancellationToken::new());
        fired.cancel();
        debug!("Rate limiter: waiting callers interrupted");
    }

    /// Stop replenishment
    ///
    /// This is a soft stop: blocked callers are neither woken nor failed, they
    /// just never receive new permits. Permits still left in the current window
    /// can be consumed. Calling it more than once has no further effect.
    pub fn shutdown(&self) {
        if !self.inner.shutdown.is_cancelled() {
            self.inner.shutdown.cancel();
            debug!("Rate limiter: shutdown requested");
        }
    }

    /// Check whether replenishment has been stopped
    pub fn is_shutdown(&self) -> bool {
        self.inner.shutdown.is_cancelled()
    }

    fn current_interrupt(&self) -> CancellationToken {
        self.inner.interrupt.lock().clone()
    }

    fn interrupted_error(start: Instant) -> SubmitError {
        SubmitError::interrupted("Rate limiter was interrupted")
            .with_context(format!("waited {:?}", start.elapsed()))
    }

    fn log_acquired(&self, start: Instant) {
        let waited = start.elapsed();
        if waited > Duration::from_millis(5) {
            debug!(
                "Rate limiter: waited {:.2}s for permit, {} remaining",
                waited.as_secs_f64(),
                self.available_permits()
            );
        } else {
            debug!(
                "Rate limiter: acquired permit, {} remaining",
                self.available_permits()
            );
        }
    }
}
