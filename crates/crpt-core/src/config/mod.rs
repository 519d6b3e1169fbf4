//! Configuration for the CRPT client
//!
//! All settings are supplied by the embedding application, either built in
//! code with the `with_*` methods or deserialized from its own config files.
//! Durations use human-readable strings (`"1m"`, `"250ms"`).

mod rate_limit;
mod submitter;
pub mod timeouts;


pub use rate_limit::RateLimitConfig;
pub use submitter::{DEFAULT_ENDPOINT, SignaturePlacement, SubmitterConfig};
pub use timeouts::TimeoutConfig;
