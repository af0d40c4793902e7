//! Scraped source material per variant.

use plx_core::entities::ScrapedDataResponse;

use crate::{ApiClient, ProjectParams, error::ApiError};

impl ApiClient {
    /// Fetch every file the scraper produced for a project, grouped by variant.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure.
    pub async fn scraped_data(&self, project_id: &str) -> Result<ScrapedDataResponse, ApiError> {
        self.get_with("/scrapeddata", &ProjectParams { project_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_scraped_data() {
        let data: ScrapedDataResponse = serde_json::from_str(
            r#"{"variants": {
                "variant_a": [{"filename": "fed.txt", "content": "Rates fell."}],
                "variant_b": []
            }}"#,
        )
        .unwrap();
        assert!(!data.is_empty());
        assert_eq!(data.variants["variant_a"][0].filename, "fed.txt");
        assert!(data.variants["variant_b"].is_empty());
    }
}
