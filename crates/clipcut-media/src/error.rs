//! Error types for metadata retrieval.

use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while retrieving video metadata.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("yt-dlp not found: {0}")]
    YtDlpNotFound(String),

    #[error("Metadata extraction failed: {message}")]
    MetadataFailed {
        message: String,
        stderr: Option<String>,
        exit_code: Option<i32>,
    },

    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MediaError {
    /// Create a metadata extraction failure error.
    pub fn metadata_failed(
        message: impl Into<String>,
        stderr: Option<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::MetadataFailed {
            message: message.into(),
            stderr,
            exit_code,
        }
    }

    /// Whether retrying the same URL later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            MediaError::Timeout(_) | MediaError::Io(_) => true,
            MediaError::MetadataFailed { stderr, .. } => stderr
                .as_deref()
                .map(is_rate_limited)
                .unwrap_or(false),
            MediaError::YtDlpNotFound(_) | MediaError::JsonParse(_) => false,
        }
    }
}

/// Detect provider rate limiting from yt-dlp stderr.
pub(crate) fn is_rate_limited(stderr: &str) -> bool {
    stderr.contains("429")
        || stderr.contains("Too Many Requests")
        || stderr.contains("rate limit")
        || stderr.contains("Sign in to confirm")
}
