//! Error codes and classification for SubmitError

use super::types::SubmitError;

impl SubmitError {
    /// Stable code for programmatic error handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "CRPT_CONFIG",
            Self::Interrupted { .. } => "CRPT_INTERRUPTED",
            Self::Encoding { .. } => "CRPT_ENCODING",
            Self::Transport { .. } => "CRPT_TRANSPORT",
            Self::Timeout { .. } => "CRPT_TIMEOUT",
        }
    }

    /// Human-readable message without the variant prefix
    pub fn message(&self) -> String {
        match self {
            Self::Configuration { message, .. }
            | Self::Interrupted { message, .. }
            | Self::Encoding { message, .. }
            | Self::Transport { message, .. } => message.clone(),
            Self::Timeout { waited, .. } => format!("no permit within {:?}", waited),
        }
    }

    /// Optional context about where the error occurred
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Configuration { context, .. }
            | Self::Interrupted { context, .. }
            | Self::Encoding { context, .. }
            | Self::Transport { context, .. }
            | Self::Timeout { context, .. } => context.as_deref(),
        }
    }

    /// Whether a caller could reasonably retry the same submission.
    ///
    /// The client itself never retries; this is advisory.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. })
    }

    /// Check if this error came from an interrupted permit wait
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}
