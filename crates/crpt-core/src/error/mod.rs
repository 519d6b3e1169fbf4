//! Error types for the CRPT client
//!
//! A single `SubmitError` enum covers every failure a caller of the submitter
//! or the rate limiter can observe:
//! - `Configuration`: invalid constructor arguments
//! - `Interrupted`: a permit wait was cancelled
//! - `Encoding`: the document could not be serialized
//! - `Transport`: the network send or receive failed
//! - `Timeout`: a timed acquire gave up

mod codes;
mod constructors;
mod conversions;
mod types;


pub use types::{SubmitError, SubmitResult};
