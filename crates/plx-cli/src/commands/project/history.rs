use anyhow::Context;
use chrono::Utc;
use plx_client::actions::history_action;
use plx_core::analysis::sort_by_score_desc;
use plx_core::entities::HistoryResponse;
use plx_core::responses::AnalysisResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output_report, output_rows, report};

pub async fn run(
    id: &str,
    item: Option<&str>,
    by_score: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut history = HistoryResponse {
        history: history_action(&ctx.client, id)
            .await
            .with_context(|| format!("failed to load history of project {id}"))?,
    };

    if let Some(item_id) = item {
        let entry = history.find(item_id)?;
        let analysis =
            AnalysisResponse::new(id, &entry.model_id, &entry.query, entry.response.clone());
        return output_report(&analysis, flags.format, report::analysis);
    }

    if by_score {
        sort_by_score_desc(&mut history.history);
    }

    let rows = report::history_rows(&history.history, Utc::now());
    output_rows(
        &history.history,
        flags.format,
        &["id", "query", "alignment", "method", "when"],
        &rows,
    )
}
