//! Constructor methods for SubmitError

use super::types::SubmitError;
use std::time::Duration;

impl SubmitError {
    /// Create a new configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            field: None,
            context: None,
        }
    }

    /// Create a configuration error naming the offending field
    pub fn configuration_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            field: Some(field.into()),
            context: None,
        }
    }

    /// Create a new interrupted error
    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::Interrupted {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new encoding error
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
            context: None,
        }
    }

    /// Create a new transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            url: None,
            status_code: None,
            context: None,
        }
    }

    /// Create a transport error for a specific URL
    pub fn transport_with_url(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            url: Some(url.into()),
            status_code: None,
            context: None,
        }
    }

    /// Create a new timeout error
    pub fn timeout(waited: Duration) -> Self {
        Self::Timeout {
            waited,
            context: None,
        }
    }

    /// Attach context to an existing error, replacing any previous context
    pub fn with_context(mut self, new_context: impl Into<String>) -> Self {
        let new_context = Some(new_context.into());
        match &mut self {
            Self::Configuration { context, .. }
            | Self::Interrupted { context, .. }
            | Self::Encoding { context, .. }
            | Self::Transport { context, .. }
            | Self::Timeout { context, .. } => *context = new_context,
        }
        self
    }
}
