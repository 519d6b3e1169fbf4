//! Rate-limited document submitter

use super::request::build_request;
use crate::config::SubmitterConfig;
use crate::document::Document;
use crate::error::{SubmitError, SubmitResult};
use crate::rate_limiter::RateLimiter;
use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Client submitting registration documents under a time-window rate limit
///
/// Every `submit` first takes a permit from the owned `RateLimiter`, then
/// serializes the document and POSTs it to the configured endpoint. The
/// response body is returned as-is; status codes are not interpreted and
/// nothing is retried. A permit is paid before the outcome is known and is
/// never refunded.
///
/// Cloning shares the HTTP connection pool and the rate limiter.
///
/// # Examples
///
/// ```no_run
/// use crpt_core::{Document, DocumentSubmitter};
/// use std::time::Duration;
///
/// # async fn example() -> crpt_core::SubmitResult<()> {
/// let submitter = DocumentSubmitter::new(Duration::from_secs(60), 10)?;
/// let body = submitter.submit(&Document::default(), "signature").await?;
/// println!("{}", body);
/// submitter.shutdown();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DocumentSubmitter {
    config: SubmitterConfig,
    http_client: Client,
    rate_limiter: RateLimiter,
}

impl DocumentSubmitter {
    /// Create a submitter for the production endpoint
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `request_limit` or `window` is zero,
    /// or if called outside a Tokio runtime.
    pub fn new(window: Duration, request_limit: u32) -> SubmitResult<Self> {
        Self::with_config(SubmitterConfig::new(window, request_limit))
    }

    /// Create a submitter from a full configuration
    pub fn with_config(config: SubmitterConfig) -> SubmitResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(config.timeouts.connection)
            .timeout(config.timeouts.request)
            .build()
            .map_err(|e| {
                SubmitError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Self::with_client(config, http_client)
    }

    /// Create a submitter reusing an existing HTTP client
    ///
    /// Timeouts in `config` are not applied to `http_client`.
    pub fn with_client(config: SubmitterConfig, http_client: Client) -> SubmitResult<Self> {
        config.validate()?;
        let rate_limiter = RateLimiter::with_config(config.rate_limit)?;

        debug!(
            "Created document submitter for '{}' ({} requests per {:?}, signature in {:?})",
            config.endpoint,
            config.rate_limit.request_limit,
            config.rate_limit.window,
            config.signature_placement
        );

        Ok(Self {
            config,
            http_client,
            rate_limiter,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &SubmitterConfig {
        &self.config
    }

    /// URL documents are POSTed to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The limiter gating this submitter
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Submit one document and return the raw response body
    ///
    /// Waits for a rate limiter permit without a timeout.
    ///
    /// # Errors
    ///
    /// - `Interrupted` if the permit wait is interrupted
    /// - `Encoding` if the document or signature cannot be encoded
    /// - `Transport` if sending the request or reading the response fails
    #[instrument(skip(self, document, signature), fields(doc_id = %document.doc_id), level = "debug")]
    pub async fn submit(&self, document: &Document, signature: &str) -> SubmitResult<String> {
        self.rate_limiter.acquire().await?;
        self.send(document, signature).await
    }

    /// Submit one document, giving up the permit wait when `token` is cancelled
    #[instrument(skip(self, document, signature, token), fields(doc_id = %document.doc_id), level = "debug")]
    pub async fn submit_cancellable(
        &self,
        document: &Document,
        signature: &str,
        token: &CancellationToken,
    ) -> SubmitResult<String> {
        self.rate_limiter.acquire_cancellable(token).await?;
        self.send(document, signature).await
    }

    /// Fail every submission currently waiting for a permit with `Interrupted`
    pub fn interrupt(&self) {
        self.rate_limiter.interrupt();
    }

    /// Stop replenishing permits
    ///
    /// Soft stop: submissions already waiting are not woken and will wait
    /// until dropped or interrupted.
    pub fn shutdown(&self) {
        self.rate_limiter.shutdown();
    }

    async fn send(&self, document: &Document, signature: &str) -> SubmitResult<String> {
        let request = build_request(
            &self.http_client,
            &self.config.endpoint,
            self.config.signature_placement,
            document,
            signature,
        )?;

        let response = request.send().await.map_err(|e| {
            SubmitError::from(e).with_context(format!(
                "Sending document '{}' to {}",
                document.doc_id, self.config.endpoint
            ))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SubmitError::from(e).with_context(format!(
                "Reading response for document '{}'",
                document.doc_id
            ))
        })?;

        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "Registration API responded"
        );

        Ok(body)
    }
}
