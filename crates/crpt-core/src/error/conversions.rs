//! From trait implementations for SubmitError conversions

use super::types::SubmitError;

impl From<serde_json::Error> for SubmitError {
    fn from(error: serde_json::Error) -> Self {
        Self::encoding(error.to_string())
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(error: reqwest::Error) -> Self {
        // Builder failures without a URL come from client setup, not from a send.
        if error.is_builder() && error.url().is_none() {
            return Self::configuration(format!("Invalid HTTP client setup: {}", error));
        }

        let status_code = error.status().map(|s| s.as_u16());
        let url = error.url().map(|u| u.to_string());
        Self::Transport {
            message: error.to_string(),
            url,
            status_code,
            context: None,
        }
    }
}
