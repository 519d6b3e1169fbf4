//! HTTP request construction for document submission

use crate::config::SignaturePlacement;
use crate::document::{Document, SignedDocument};
use crate::error::{SubmitError, SubmitResult};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, RequestBuilder};

/// Header carrying the opaque signature
pub const SIGNATURE_HEADER: &str = "Signature";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the POST request for one document.
///
/// Serialization happens here, so encoding failures surface before anything
/// touches the network.
pub(super) fn build_request(
    client: &Client,
    endpoint: &str,
    placement: SignaturePlacement,
    document: &Document,
    signature: &str,
) -> SubmitResult<RequestBuilder> {
    let request = client
        .post(endpoint)
        .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

    let request = match placement {
        SignaturePlacement::Header => {
            let value = HeaderValue::from_str(signature).map_err(|e| {
                SubmitError::encoding(format!("Signature is not a valid header value: {}", e))
            })?;
            request
                .header(SIGNATURE_HEADER, value)
                .body(document.to_wire_json()?)
        }
        SignaturePlacement::Body => {
            request.body(SignedDocument::new(document, signature).to_wire_json()?)
        }
    };

    Ok(request)
}
