//! Project detail loader.

use plx_core::responses::ProjectPage;

use super::{ActionError, ActionResult};
use crate::ApiClient;

/// Fetch everything the project detail view needs, concurrently.
///
/// # Errors
///
/// Returns [`ActionError::NotFound`] if any of the five fetches fails; the
/// underlying cause is logged.
pub async fn load_project_page(client: &ApiClient, project_id: &str) -> ActionResult<ProjectPage> {
    let fetched = tokio::try_join!(
        client.project_info(project_id),
        client.project_status(project_id),
        client.all_models(),
        client.scraped_data(project_id),
        client.history(project_id),
    );

    match fetched {
        Ok((info, status, models, scraped, history)) => Ok(ProjectPage {
            project_id: project_id.to_string(),
            info,
            status,
            models,
            scraped,
            history,
        }),
        Err(error) => {
            tracing::warn!(project_id, %error, "failed to load project page");
            Err(ActionError::NotFound(project_id.to_string()))
        }
    }
}
