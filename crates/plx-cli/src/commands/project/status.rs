use anyhow::Context;
use chrono::Utc;
use plx_client::actions::check_project_status_action;
use plx_core::analysis::relative_age;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_report;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = check_project_status_action(&ctx.client, id)
        .await
        .with_context(|| format!("failed to check status of project {id}"))?;

    output_report(&status, flags.format, |s| {
        let mut lines = vec![format!(
            "{}  (updated {})",
            s.status.as_str().to_uppercase(),
            relative_age(&s.last_updated, Utc::now())
        )];
        lines.extend(s.log_lines().into_iter().map(|l| format!("  {l}")));
        lines.join("\n")
    })
}
