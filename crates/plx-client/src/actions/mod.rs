//! Action layer between user input and the API client.
//!
//! Each action normalizes its input, makes exactly one client call, and
//! converts transport failures into an [`ActionError`] carrying a message
//! that can be shown as-is.

mod form;
mod page;

pub use form::{CREATOR_NAME, DESCRIPTION, FormData, PROJECT_NAME, TAGS, parse_tags};
pub use page::load_project_page;

use indexmap::IndexMap;
use plx_core::entities::{
    HistoryItem, Model, ProjectCreateInput, ProjectStatus, QueryInput, QueryResponse,
    ScrapedDataResponse, VARIANT_A, VARIANT_B,
};
use plx_core::enums::CreateStatus;
use thiserror::Error;

use crate::{ApiClient, ApiError};

const CREATE_FAILED: &str = "Failed to create project";
const STATUS_FAILED: &str = "Failed to check project status";
const QUERY_FAILED: &str = "Failed to query model";
const PROJECTS_FAILED: &str = "Failed to load projects";
const MODELS_FAILED: &str = "Failed to load models";
const SCRAPED_FAILED: &str = "Failed to load scraped data";
const HISTORY_FAILED: &str = "Failed to load history";

pub type ActionResult<T> = Result<T, ActionError>;

/// User-facing outcome of a failed action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Step-one fields are absent; the user has to start over.
    #[error("Missing information: {}", .fields.join(", "))]
    MissingInformation { fields: Vec<String> },

    /// Input refused before any request was made.
    #[error("{0}")]
    Invalid(String),

    /// The backend answered but declined the request.
    #[error("{0}")]
    Rejected(String),

    /// The request itself failed.
    #[error("{0}")]
    Request(String),

    /// The project could not be loaded.
    #[error("Project not found: {0}")]
    NotFound(String),
}

impl ActionError {
    fn request(error: &ApiError, fallback: &str) -> Self {
        Self::Request(non_empty_or(error.to_string(), fallback))
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// Build a [`ProjectCreateInput`] from submitted form fields.
///
/// # Errors
///
/// Returns [`ActionError::MissingInformation`] if the project or creator
/// name is absent or blank.
pub fn project_input_from_form(form: &FormData) -> ActionResult<ProjectCreateInput> {
    let missing: Vec<String> = [PROJECT_NAME, CREATOR_NAME]
        .into_iter()
        .filter(|field| form.get(field).is_none_or(|v| v.trim().is_empty()))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(ActionError::MissingInformation { fields: missing });
    }

    let mut variant = IndexMap::new();
    for key in [VARIANT_A, VARIANT_B] {
        let snippets = form
            .get_all(key)
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect();
        variant.insert(key.to_string(), snippets);
    }

    Ok(ProjectCreateInput {
        project_name: form.get(PROJECT_NAME).unwrap_or_default().to_string(),
        creator_name: form.get(CREATOR_NAME).unwrap_or_default().to_string(),
        description: form.get(DESCRIPTION).unwrap_or_default().to_string(),
        tags: parse_tags(form.get(TAGS).unwrap_or_default()),
        variant,
    })
}

/// Create a project from step-two form fields and return its id.
///
/// # Errors
///
/// [`ActionError::MissingInformation`] without any network call when the
/// step-one fields are missing, [`ActionError::Rejected`] when the backend
/// reports `failure`, [`ActionError::Request`] when the call fails.
pub async fn create_project_action(client: &ApiClient, form: &FormData) -> ActionResult<String> {
    let input = project_input_from_form(form)?;
    tracing::debug!(
        project_name = %input.project_name,
        snippets = input.snippet_count(),
        "creating project"
    );

    let response = client
        .create_project(&input)
        .await
        .map_err(|e| ActionError::request(&e, CREATE_FAILED))?;

    match response.status {
        CreateStatus::Success if !response.project_id.is_empty() => {
            tracing::info!(project_id = %response.project_id, "project created");
            Ok(response.project_id)
        }
        CreateStatus::Success => Err(ActionError::Rejected(non_empty_or(
            response.message,
            "Backend returned no project id",
        ))),
        CreateStatus::Failure => Err(ActionError::Rejected(non_empty_or(
            response.message,
            CREATE_FAILED,
        ))),
    }
}

/// Fetch the scrape status of a project.
///
/// # Errors
///
/// Returns [`ActionError::Request`] when the call fails.
pub async fn check_project_status_action(
    client: &ApiClient,
    project_id: &str,
) -> ActionResult<ProjectStatus> {
    client
        .project_status(project_id)
        .await
        .map_err(|e| ActionError::request(&e, STATUS_FAILED))
}

/// Run one analysis query.
///
/// # Errors
///
/// [`ActionError::Invalid`] for a blank query or model, [`ActionError::Rejected`]
/// when the response carries an `error`, [`ActionError::Request`] when the
/// call fails.
pub async fn query_model_action(
    client: &ApiClient,
    project_id: &str,
    model_id: &str,
    query: &str,
) -> ActionResult<QueryResponse> {
    if query.trim().is_empty() {
        return Err(ActionError::Invalid("Query must not be empty".into()));
    }
    if model_id.trim().is_empty() {
        return Err(ActionError::Invalid("Select an analysis method".into()));
    }

    let input = QueryInput {
        project_id: project_id.to_string(),
        model_id: model_id.to_string(),
        query: query.to_string(),
    };
    let response = client
        .query_model(&input)
        .await
        .map_err(|e| ActionError::request(&e, QUERY_FAILED))?;

    if let Some(error) = response.backend_error() {
        return Err(ActionError::Rejected(error.to_string()));
    }
    Ok(response)
}

/// # Errors
///
/// Returns [`ActionError::Request`] when the call fails.
pub async fn list_projects_action(client: &ApiClient) -> ActionResult<Vec<String>> {
    client
        .all_projects()
        .await
        .map_err(|e| ActionError::request(&e, PROJECTS_FAILED))
}

/// # Errors
///
/// Returns [`ActionError::Request`] when the call fails.
pub async fn list_models_action(client: &ApiClient) -> ActionResult<Vec<Model>> {
    client
        .all_models()
        .await
        .map_err(|e| ActionError::request(&e, MODELS_FAILED))
}

/// # Errors
///
/// Returns [`ActionError::Request`] when the call fails.
pub async fn scraped_data_action(
    client: &ApiClient,
    project_id: &str,
) -> ActionResult<ScrapedDataResponse> {
    client
        .scraped_data(project_id)
        .await
        .map_err(|e| ActionError::request(&e, SCRAPED_FAILED))
}

/// # Errors
///
/// Returns [`ActionError::Request`] when the call fails.
pub async fn history_action(client: &ApiClient, project_id: &str) -> ActionResult<Vec<HistoryItem>> {
    client
        .history(project_id)
        .await
        .map_err(|e| ActionError::request(&e, HISTORY_FAILED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step_two_form() -> FormData {
        FormData::draft("Rates", "ana", "", "economy, policy ")
            .with(VARIANT_A, "Rates should fall.")
            .with(VARIANT_A, "   ")
            .with(VARIANT_B, "")
    }

    #[test]
    fn form_maps_to_create_input() {
        let input = project_input_from_form(&step_two_form()).unwrap();
        assert_eq!(input.project_name, "Rates");
        assert_eq!(input.tags, vec!["economy", "policy"]);
        assert_eq!(input.variant[VARIANT_A], vec!["Rates should fall."]);
        assert!(input.variant[VARIANT_B].is_empty());
        let keys: Vec<&str> = input.variant.keys().map(String::as_str).collect();
        assert_eq!(keys, vec![VARIANT_A, VARIANT_B]);
    }

    #[test]
    fn empty_variants_are_still_sent() {
        let form = FormData::draft("Rates", "ana", "", "");
        let input = project_input_from_form(&form).unwrap();
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(
            body["variant"],
            serde_json::json!({"variant_a": [], "variant_b": []})
        );
        assert_eq!(body["tags"], serde_json::json!([]));
    }

    #[test]
    fn missing_step_one_fields() {
        let form = FormData::new().with(PROJECT_NAME, "  ");
        let err = project_input_from_form(&form).unwrap_err();
        assert_eq!(
            err,
            ActionError::MissingInformation {
                fields: vec![PROJECT_NAME.to_string(), CREATOR_NAME.to_string()]
            }
        );
    }

    #[tokio::test]
    async fn missing_information_makes_no_request() {
        // Nothing listens on this address; reaching the network would fail
        // with a Request error instead.
        let client = ApiClient::with_base_url("http://127.0.0.1:9").unwrap();
        let form = FormData::new().with(CREATOR_NAME, "ana");
        let err = create_project_action(&client, &form).await.unwrap_err();
        assert!(matches!(err, ActionError::MissingInformation { .. }));
    }

    #[tokio::test]
    async fn blank_query_is_invalid() {
        let client = ApiClient::with_base_url("http://127.0.0.1:9").unwrap();
        let err = query_model_action(&client, "p1", "single_judge", "  ")
            .await
            .unwrap_err();
        assert_eq!(err, ActionError::Invalid("Query must not be empty".into()));

        let err = query_model_action(&client, "p1", "", "Who gains?")
            .await
            .unwrap_err();
        assert!(matches!(err, ActionError::Invalid(_)));
    }

    #[test]
    fn empty_error_text_falls_back() {
        assert_eq!(non_empty_or(String::new(), CREATE_FAILED), CREATE_FAILED);
        assert_eq!(non_empty_or("boom".into(), CREATE_FAILED), "boom");
    }
}
