//! Past analyses of a project.

use plx_core::entities::{HistoryItem, HistoryResponse};

use crate::{ApiClient, ProjectParams, error::ApiError};

impl ApiClient {
    /// Fetch the stored query history of a project, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure.
    pub async fn history(&self, project_id: &str) -> Result<Vec<HistoryItem>, ApiError> {
        let data: HistoryResponse = self
            .get_with("/history", &ProjectParams { project_id })
            .await?;
        Ok(data.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_history_response() {
        let data: HistoryResponse = serde_json::from_str(
            r#"{"history": [{
                "id": "h1",
                "query": "Who gains?",
                "model_id": "single_judge",
                "timestamp": "2025-12-23T10:00:00Z",
                "response": {"score": 30, "alignment": "leans_variant_a", "biases": {"variant_a": 0.7, "variant_b": 0.3}}
            }]}"#,
        )
        .unwrap();
        assert_eq!(data.history.len(), 1);
        assert!((data.history[0].response.biases["variant_a"] - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_history_is_empty() {
        let data: HistoryResponse = serde_json::from_str("{}").unwrap();
        assert!(data.history.is_empty());
    }
}
