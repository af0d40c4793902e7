use anyhow::bail;
use plx_client::actions::FormData;
use plx_core::responses::DraftResponse;
use plx_core::routes;

use crate::cli::GlobalFlags;
use crate::output::output_report;

pub fn run(
    name: &str,
    creator: &str,
    description: &str,
    tags: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if name.trim().is_empty() || creator.trim().is_empty() {
        bail!("--name and --creator must not be blank");
    }

    let query = FormData::draft(name, creator, description, tags).to_query();
    let response = DraftResponse {
        next: routes::create_step_two(&query),
        query,
    };
    output_report(&response, flags.format, |r| {
        format!(
            "{}\n\nAdd knowledge-base snippets and create the project:\n  plx project create --draft '{}' --variant-a <TEXT> --variant-b <TEXT>",
            r.next, r.query
        )
    })
}
