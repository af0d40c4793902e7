//! CLI response types returned as JSON by `plx` commands.
//!
//! These structs define the shape of output for commands like
//! `plx projects`, `plx project show`, `plx project create` and `plx query`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::{BiasBreakdown, ScoreBand};
use crate::entities::{
    HistoryItem, Model, ProjectInfo, ProjectStatus, QueryResponse, ScrapedDataResponse,
};

/// Response from `plx projects`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub projects: Vec<String>,
    pub total: usize,
}

/// Response from `plx project draft`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DraftResponse {
    /// URL-encoded step-one fields.
    pub query: String,
    /// Route of the second creation step.
    pub next: String,
}

/// Response from `plx project create --no-wait`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectCreatedResponse {
    pub project_id: String,
    pub route: String,
}

/// Everything the project detail view shows, fetched in one go.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectPage {
    pub project_id: String,
    pub info: ProjectInfo,
    pub status: ProjectStatus,
    pub models: Vec<Model>,
    pub scraped: ScrapedDataResponse,
    pub history: Vec<HistoryItem>,
}

impl ProjectPage {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.status.is_ready()
    }
}

/// Final state of a status-polling session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WatchResponse {
    pub project_id: String,
    pub status: String,
    pub log: Vec<String>,
    /// Route the session redirected to, absent if it was cancelled first.
    pub navigate_to: Option<String>,
}

/// Response from `plx query` and `plx project history --item`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisResponse {
    pub project_id: String,
    pub model_id: String,
    pub query: String,
    pub band: ScoreBand,
    pub breakdown: BiasBreakdown,
    pub response: QueryResponse,
}

impl AnalysisResponse {
    #[must_use]
    pub fn new(project_id: &str, model_id: &str, query: &str, response: QueryResponse) -> Self {
        Self {
            project_id: project_id.to_string(),
            model_id: model_id.to_string(),
            query: query.to_string(),
            band: ScoreBand::from_score(response.score),
            breakdown: BiasBreakdown::from_biases(&response.biases),
            response,
        }
    }
}
