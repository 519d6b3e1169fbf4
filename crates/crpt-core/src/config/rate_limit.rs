//! Rate limit configuration

use crate::error::{SubmitError, SubmitResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Window and capacity of a time-window rate limiter
///
/// # Examples
///
/// ```
/// use crpt_core::config::RateLimitConfig;
/// use std::time::Duration;
///
/// let config = RateLimitConfig::per_minute(10);
/// assert_eq!(config.window, Duration::from_secs(60));
/// assert!(config.validate().is_ok());
///
/// let config = RateLimitConfig::new(Duration::from_millis(100), 0);
/// assert!(config.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Length of one replenishment window
    #[serde(default = "default_window", with = "humantime_serde")]
    pub window: Duration,
    /// Maximum permits handed out per window
    #[serde(default = "default_request_limit")]
    pub request_limit: u32,
}

fn default_window() -> Duration {
    Duration::from_secs(60)
}

fn default_request_limit() -> u32 {
    10
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            request_limit: default_request_limit(),
        }
    }
}

impl RateLimitConfig {
    /// Create a new rate limit configuration
    pub fn new(window: Duration, request_limit: u32) -> Self {
        Self {
            window,
            request_limit,
        }
    }

    /// `request_limit` permits per second
    pub fn per_second(request_limit: u32) -> Self {
        Self::new(Duration::from_secs(1), request_limit)
    }

    /// `request_limit` permits per minute
    pub fn per_minute(request_limit: u32) -> Self {
        Self::new(Duration::from_secs(60), request_limit)
    }

    /// Set the window length
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Set the request limit
    pub fn with_request_limit(mut self, request_limit: u32) -> Self {
        self.request_limit = request_limit;
        self
    }

    /// Reject a zero limit or a zero-length window
    pub fn validate(&self) -> SubmitResult<()> {
        if self.request_limit == 0 {
            return Err(SubmitError::configuration_field(
                "request_limit must be greater than zero",
                "request_limit",
            ));
        }
        if self.window.is_zero() {
            return Err(SubmitError::configuration_field(
                "window must be longer than zero",
                "window",
            ));
        }
        Ok(())
    }
}
