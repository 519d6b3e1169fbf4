//! CRPT Client Core Library
//!
//! Rate-limited submission of registration documents to the CRPT API. The
//! `RateLimiter` caps outbound calls per time window; the `DocumentSubmitter`
//! gates every call through it, serializes the document and POSTs it.

pub mod config;
pub mod document;
pub mod error;
pub mod rate_limiter;
pub mod submitter;

// Re-export commonly used types
pub use config::{RateLimitConfig, SignaturePlacement, SubmitterConfig, TimeoutConfig};
pub use document::{Document, Product, SignedDocument};
pub use error::{SubmitError, SubmitResult};
pub use rate_limiter::RateLimiter;
pub use submitter::DocumentSubmitter;
