//! Transport error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("API request failed: {status_text} ({status})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status code.
        status_text: String,
        /// Response body, kept for logging.
        body: String,
    },

    /// `base_url + endpoint` did not form a valid URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A JSON body could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|s| s.as_u16()),
            Self::InvalidUrl { .. } | Self::Decode(_) => None,
        }
    }
}
