//! Timeout configuration for the HTTP transport

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default connection timeout for the registration API (30 seconds)
pub const CONNECTION_SECS: u64 = 30;

/// Default request timeout for the registration API (60 seconds)
pub const REQUEST_SECS: u64 = 60;

/// Connection and request timeouts applied to every submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Time allowed to establish the TCP/TLS connection
    #[serde(default = "default_connection_timeout", with = "humantime_serde")]
    pub connection: Duration,
    /// Time allowed for the whole request, including reading the body
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request: Duration,
}

fn default_connection_timeout() -> Duration {
    Duration::from_secs(CONNECTION_SECS)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(REQUEST_SECS)
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connection: default_connection_timeout(),
            request: default_request_timeout(),
        }
    }
}

impl TimeoutConfig {
    /// Create a timeout configuration
    pub fn new(connection: Duration, request: Duration) -> Self {
        Self {
            connection,
            request,
        }
    }

    /// Set the connection timeout
    pub fn with_connection(mut self, connection: Duration) -> Self {
        self.connection = connection;
        self
    }

    /// Set the request timeout
    pub fn with_request(mut self, request: Duration) -> Self {
        self.request = request;
        self
    }
}
