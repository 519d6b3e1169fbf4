//! Submitter configuration

use super::rate_limit::RateLimitConfig;
use super::timeouts::TimeoutConfig;
use crate::error::{SubmitError, SubmitResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production endpoint of the document registration API
pub const DEFAULT_ENDPOINT: &str = "https://ismp.crpt.ru/api/v3/lk/documents/create";

/// Where the opaque signature travels in the request
///
/// `Header` is the contract of the registration API as this client
/// understands it. `Body` wraps the document as
/// `{"document": {...}, "signature": "..."}` and is only used when
/// selected explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignaturePlacement {
    /// `Signature: <value>` request header
    #[default]
    Header,
    /// Embedded next to the document in the JSON body
    Body,
}

/// Configuration for `DocumentSubmitter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitterConfig {
    /// Full URL the documents are POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Rate limit applied to outbound submissions
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// HTTP timeouts
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    /// Signature transport
    #[serde(default)]
    pub signature_placement: SignaturePlacement,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            rate_limit: RateLimitConfig::default(),
            timeouts: TimeoutConfig::default(),
            signature_placement: SignaturePlacement::default(),
        }
    }
}

impl SubmitterConfig {
    /// Create a configuration for the production endpoint with the given limit
    pub fn new(window: Duration, request_limit: u32) -> Self {
        Self {
            rate_limit: RateLimitConfig::new(window, request_limit),
            ..Default::default()
        }
    }

    /// Set the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the rate limit
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Set the HTTP timeouts
    pub fn with_timeouts(mut self, timeouts: TimeoutConfig) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Choose where the signature is sent
    pub fn with_signature_placement(mut self, placement: SignaturePlacement) -> Self {
        self.signature_placement = placement;
        self
    }

    /// Validate the endpoint, the rate limit and the timeouts
    pub fn validate(&self) -> SubmitResult<()> {
        let url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            SubmitError::configuration_field(
                format!("Invalid endpoint URL '{}': {}", self.endpoint, e),
                "endpoint",
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SubmitError::configuration_field(
                format!("Unsupported endpoint scheme '{}'", url.scheme()),
                "endpoint",
            ));
        }

        self.rate_limit.validate()?;

        if self.timeouts.connection.is_zero() || self.timeouts.request.is_zero() {
            return Err(SubmitError::configuration_field(
                "timeouts must be longer than zero",
                "timeouts",
            ));
        }
        Ok(())
    }
}
