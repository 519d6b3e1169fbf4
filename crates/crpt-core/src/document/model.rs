//! Registration document data model

use serde::{Deserialize, Serialize};

/// A registration submission for the "introduce goods" document type
///
/// Field names match the wire schema exactly. Dates are kept as the caller's
/// text and are never parsed or reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: String,
    pub doc_status: String,
    pub doc_type: String,
    #[serde(rename = "importRequest")]
    pub import_request: bool,
    pub owner_inn: String,
    pub participant_inn: String,
    pub producer_inn: String,
    pub production_date: String,
    pub production_type: String,
    /// Certified items, in submission order
    pub products: Vec<Product>,
    pub reg_date: String,
    pub reg_number: String,
}

/// One certified item inside a `Document`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Product {
    pub certificate_document: String,
    pub certificate_document_date: String,
    pub certificate_document_number: String,
    pub owner_inn: String,
    pub producer_inn: String,
    pub production_date: String,
    pub tnved_code: String,
    pub uit_code: String,
    pub uitu_code: String,
}

/// Document and signature sent together in the request body
///
/// Only used with `SignaturePlacement::Body`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignedDocument<'a> {
    pub document: &'a Document,
    pub signature: &'a str,
}

impl<'a> SignedDocument<'a> {
    /// Pair a document with its signature
    pub fn new(document: &'a Document, signature: &'a str) -> Self {
        Self {
            document,
            signature,
        }
    }
}
