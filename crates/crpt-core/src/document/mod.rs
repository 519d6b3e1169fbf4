//! Registration document wire model
//!
//! Field names are preserved verbatim on the wire, products keep their order
//! and booleans are encoded as JSON literals.

mod model;
mod wire;


pub use model::{Document, Product, SignedDocument};
