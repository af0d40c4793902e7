//! Analysis model catalogue.

use plx_core::entities::{Model, ModelsResponse};

use crate::{ApiClient, error::ApiError};

impl ApiClient {
    /// List the analysis methods the backend offers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure.
    pub async fn all_models(&self) -> Result<Vec<Model>, ApiError> {
        let data: ModelsResponse = self.get("/allmodels").await?;
        Ok(data.models)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_models_response() {
        let data: ModelsResponse = serde_json::from_str(
            r#"{"models": [
                {"model_id": "single_judge", "description": "One model scores both sides"},
                {"model_id": "multi_agent_debate"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(data.models.len(), 2);
        assert_eq!(data.models[0].model_id, "single_judge");
        assert!(data.models[1].description.is_empty());
    }
}
