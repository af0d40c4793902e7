//! Cross-cutting error types for Parallax.
//!
//! Transport errors (`ApiError`) and action-boundary errors (`ActionError`)
//! live in `plx-client`. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Parallax crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// JSON conversion failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
