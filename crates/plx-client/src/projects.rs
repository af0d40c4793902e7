//! Project endpoints: listing, creation, metadata, and scrape status.

use plx_core::entities::{
    ProjectCreateInput, ProjectCreateResponse, ProjectInfo, ProjectStatus, ProjectsResponse,
};

use crate::{ApiClient, ProjectParams, error::ApiError};

impl ApiClient {
    /// List the ids of every project.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn all_projects(&self) -> Result<Vec<String>, ApiError> {
        let data: ProjectsResponse = self.get("/allprojects").await?;
        Ok(data.projects)
    }

    /// Submit a new project. Scraping starts on the backend once this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure. A
    /// `failure` status in the body is *not* an error at this layer.
    pub async fn create_project(
        &self,
        input: &ProjectCreateInput,
    ) -> Result<ProjectCreateResponse, ApiError> {
        self.post("/createproject", input).await
    }

    /// Fetch a project's name, creator, tags, and variant snippets.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure.
    pub async fn project_info(&self, project_id: &str) -> Result<ProjectInfo, ApiError> {
        self.get_with("/projectinfo", &ProjectParams { project_id })
            .await
    }

    /// Fetch a project's current scrape status.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure.
    pub async fn project_status(&self, project_id: &str) -> Result<ProjectStatus, ApiError> {
        self.get_with("/projectstatus", &ProjectParams { project_id })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plx_core::enums::{CreateStatus, ProjectState};
    use pretty_assertions::assert_eq;

    const INFO_FIXTURE: &str = r#"{
        "project_name": "Rates debate",
        "creator_name": "ana",
        "description": "Two takes on the rate decision",
        "tags": ["economy", "policy"],
        "variants": {
            "variant_b": ["Rates should rise."],
            "variant_a": ["Rates should fall.", "Inflation is easing."]
        }
    }"#;

    #[test]
    fn parse_projects_response() {
        let data: ProjectsResponse =
            serde_json::from_str(r#"{"projects": ["p1", "p2"]}"#).unwrap();
        assert_eq!(data.projects, vec!["p1", "p2"]);
    }

    #[test]
    fn parse_project_info_keeps_variant_order() {
        let info: ProjectInfo = serde_json::from_str(INFO_FIXTURE).unwrap();
        assert_eq!(info.tags, vec!["economy", "policy"]);
        let keys: Vec<&str> = info.variants.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["variant_b", "variant_a"]);
        assert_eq!(info.variants["variant_a"].len(), 2);
    }

    #[test]
    fn parse_failed_creation() {
        let data: ProjectCreateResponse =
            serde_json::from_str(r#"{"status": "failure", "message": "name taken"}"#).unwrap();
        assert_eq!(data.status, CreateStatus::Failure);
        assert!(data.project_id.is_empty());
        assert_eq!(data.message, "name taken");
    }

    #[test]
    fn parse_ready_status() {
        let status: ProjectStatus = serde_json::from_str(
            r#"{"status": "ready", "last_updated": "2025-12-23T10:00:00Z", "message": "done"}"#,
        )
        .unwrap();
        assert_eq!(status.status, ProjectState::Ready);
        assert!(status.is_ready());
    }
}
