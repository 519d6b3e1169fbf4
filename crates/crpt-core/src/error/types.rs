//! Core error types for the CRPT client

use std::time::Duration;
use thiserror::Error;

/// Result type alias for CRPT client operations
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Main error type for the CRPT client
///
/// Every failure of `DocumentSubmitter::submit` or of the rate limiter maps to
/// exactly one of these variants. None of them is retried internally; callers
/// decide whether to retry, log or abort.
#[derive(Error, Debug, Clone)]
pub enum SubmitError {
    /// Invalid constructor arguments or configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// Waiting for a rate limiter permit was interrupted
    #[error("Interrupted while waiting for a permit: {message}")]
    Interrupted {
        message: String,
        context: Option<String>,
    },

    /// The document could not be serialized to its wire form
    #[error("Encoding error: {message}")]
    Encoding {
        message: String,
        context: Option<String>,
    },

    /// The HTTP request could not be sent or its response could not be read
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
        context: Option<String>,
    },

    /// A timed acquire gave up before a permit became available
    #[error("Timed out after {waited:?} waiting for a permit")]
    Timeout {
        waited: Duration,
        context: Option<String>,
    },
}
