//! Document submission to the registration API

mod client;
mod request;

pub use client::DocumentSubmitter;
pub use request::SIGNATURE_HEADER;
