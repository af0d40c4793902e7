use anyhow::Context;
use plx_client::actions::list_projects_action;
use plx_core::responses::ProjectListResponse;
use plx_core::routes;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `plx projects`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let projects = list_projects_action(&ctx.client)
        .await
        .context("failed to list projects")?;

    let rows: Vec<Vec<String>> = projects
        .iter()
        .map(|id| vec![id.clone(), routes::project_detail(id)])
        .collect();
    let response = ProjectListResponse {
        total: projects.len(),
        projects,
    };
    output_rows(&response, flags.format, &["project_id", "route"], &rows)
}
