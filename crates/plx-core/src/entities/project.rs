use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CreateStatus;

/// Body of `POST /createproject`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectCreateInput {
    pub project_name: String,
    pub creator_name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Variant name → knowledge-base snippets (`variant_a`, `variant_b`).
    pub variant: IndexMap<String, Vec<String>>,
}

impl ProjectCreateInput {
    /// Total number of knowledge-base snippets across all variants.
    #[must_use]
    pub fn snippet_count(&self) -> usize {
        self.variant.values().map(Vec::len).sum()
    }
}

/// Response of `POST /createproject`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectCreateResponse {
    pub status: CreateStatus,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub message: String,
}

/// Response of `GET /allprojects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectsResponse {
    pub projects: Vec<String>,
}

/// Response of `GET /projectinfo`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectInfo {
    pub project_name: String,
    pub creator_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Variant name → knowledge-base snippets, in backend order.
    #[serde(default)]
    pub variants: IndexMap<String, Vec<String>>,
}
