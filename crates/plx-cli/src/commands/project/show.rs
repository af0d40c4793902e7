use chrono::Utc;
use plx_client::actions::load_project_page;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{output_report, report};

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = load_project_page(&ctx.client, id).await?;
    output_report(&page, flags.format, |p| report::project_page(p, Utc::now()))
}
