use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A document the backend scraped for one variant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScrapedFile {
    pub filename: String,
    #[serde(default)]
    pub content: String,
}

/// Response of `GET /scrapeddata`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScrapedDataResponse {
    #[serde(default)]
    pub variants: IndexMap<String, Vec<ScrapedFile>>,
}

impl ScrapedDataResponse {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.values().all(Vec::is_empty)
    }

    /// Find a scraped file by name, optionally restricted to one variant.
    ///
    /// Returns the owning variant name alongside the file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when no matching file exists.
    pub fn find(
        &self,
        filename: &str,
        variant: Option<&str>,
    ) -> Result<(&str, &ScrapedFile), CoreError> {
        self.variants
            .iter()
            .filter(|(name, _)| variant.is_none_or(|v| v == name.as_str()))
            .find_map(|(name, files)| {
                files
                    .iter()
                    .find(|file| file.filename == filename)
                    .map(|file| (name.as_str(), file))
            })
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "scraped file".into(),
                id: filename.to_string(),
            })
    }
}
