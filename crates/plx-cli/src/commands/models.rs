use anyhow::Context;
use plx_client::actions::list_models_action;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_rows;

/// Handle `plx models`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let models = list_models_action(&ctx.client)
        .await
        .context("failed to list analysis methods")?;

    let rows: Vec<Vec<String>> = models
        .iter()
        .map(|m| vec![m.model_id.clone(), m.description.clone()])
        .collect();
    output_rows(&models, flags.format, &["model_id", "description"], &rows)
}
