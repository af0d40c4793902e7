//! Bias analysis queries.

use plx_core::entities::{QueryInput, QueryResponse};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// Ask a model to analyse `input.query` against the project's variants.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure. An
    /// `error` field inside a successful response is left to the caller.
    pub async fn query_model(&self, input: &QueryInput) -> Result<QueryResponse, ApiError> {
        self.post("/query", input).await
    }
}
