use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::QueryResponse;
use crate::errors::CoreError;

/// A previously executed query and the analysis the backend stored for it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistoryItem {
    pub id: String,
    pub query: String,
    pub model_id: String,
    pub timestamp: String,
    pub response: QueryResponse,
}

impl AsRef<QueryResponse> for HistoryItem {
    fn as_ref(&self) -> &QueryResponse {
        &self.response
    }
}

/// Response of `GET /history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HistoryResponse {
    #[serde(default)]
    pub history: Vec<HistoryItem>,
}

impl HistoryResponse {
    /// Look up a stored query by id for replay.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when no item carries `id`.
    pub fn find(&self, id: &str) -> Result<&HistoryItem, CoreError> {
        self.history
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "history item".into(),
                id: id.to_string(),
            })
    }
}
