use anyhow::{Context, bail};
use plx_client::actions::{list_models_action, query_model_action};
use plx_core::responses::AnalysisResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QueryArgs;
use crate::context::AppContext;
use crate::output::{output_report, report};
use crate::progress::Progress;

/// Handle `plx query`.
pub async fn handle(args: &QueryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let model_id = resolve_model(args.model.as_deref(), ctx).await?;

    let progress = Progress::spinner(&format!("Analyzing with {model_id}..."));
    let result = query_model_action(&ctx.client, &args.project_id, &model_id, &args.text).await;
    progress.finish_clear();
    let response = result.context("analysis failed")?;

    let analysis = AnalysisResponse::new(&args.project_id, &model_id, &args.text, response);
    output_report(&analysis, flags.format, report::analysis)
}

/// `--model`, then `general.default_model`, then the first listed method.
async fn resolve_model(explicit: Option<&str>, ctx: &AppContext) -> anyhow::Result<String> {
    if let Some(model) = explicit.or_else(|| ctx.config.general.default_model()) {
        return Ok(model.to_string());
    }

    let models = list_models_action(&ctx.client)
        .await
        .context("failed to list analysis methods")?;
    let Some(first) = models.into_iter().next() else {
        bail!("the backend offers no analysis methods");
    };
    tracing::debug!(model_id = %first.model_id, "defaulting to first analysis method");
    Ok(first.model_id)
}
