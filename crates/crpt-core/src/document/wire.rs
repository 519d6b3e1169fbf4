//! Canonical JSON encoding of documents

use super::model::{Document, SignedDocument};
use crate::error::{SubmitError, SubmitResult};
use serde::Serialize;

impl Document {
    /// Serialize to the compact JSON body sent to the registration API
    pub fn to_wire_json(&self) -> SubmitResult<String> {
        encode(self).map_err(|e| e.with_context(format!("Encoding document '{}'", self.doc_id)))
    }
}

impl SignedDocument<'_> {
    /// Serialize the document and its signature as one JSON body
    pub fn to_wire_json(&self) -> SubmitResult<String> {
        encode(self).map_err(|e| {
            e.with_context(format!(
                "Encoding signed document '{}'",
                self.document.doc_id
            ))
        })
    }
}

fn encode<T: Serialize + ?Sized>(value: &T) -> SubmitResult<String> {
    serde_json::to_string(value).map_err(SubmitError::from)
}
