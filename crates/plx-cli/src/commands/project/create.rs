use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, bail};
use plx_client::actions::{
    ActionError, CREATOR_NAME, DESCRIPTION, FormData, PROJECT_NAME, TAGS, create_project_action,
};
use plx_client::poller::PollSession;
use plx_core::entities::{VARIANT_A, VARIANT_B};
use plx_core::responses::ProjectCreatedResponse;
use plx_core::routes;

use super::watch;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::CreateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = build_form(args)?;

    let project_id = match create_project_action(&ctx.client, &form).await {
        Ok(id) => id,
        Err(ActionError::MissingInformation { fields }) => bail!(
            "Missing Information: we couldn't find the necessary project details ({}). \
             Please start over with `plx project draft`.",
            fields.join(", ")
        ),
        Err(error) => return Err(error).context("failed to create project"),
    };

    if args.no_wait {
        let response = ProjectCreatedResponse {
            route: routes::project_detail(&project_id),
            project_id,
        };
        return output(&response, flags.format);
    }

    let session = PollSession::spawn(Arc::clone(&ctx.client), &project_id, ctx.poll_settings());
    let response = watch::follow(session).await?;
    watch::print(&response, flags)
}

/// Explicit flags first, so they win over `--draft` values on lookup.
fn build_form(args: &CreateArgs) -> anyhow::Result<FormData> {
    let mut form = FormData::new();
    for (field, value) in [
        (PROJECT_NAME, &args.name),
        (CREATOR_NAME, &args.creator),
        (DESCRIPTION, &args.description),
        (TAGS, &args.tags),
    ] {
        if let Some(value) = value {
            form.append(field, value.as_str());
        }
    }

    if let Some(draft) = &args.draft {
        let drafted =
            FormData::from_query(routes::draft_query(draft)).context("invalid --draft value")?;
        for (name, value) in drafted.iter() {
            form.append(name, value);
        }
    }

    for (key, texts, files) in [
        (VARIANT_A, &args.variant_a, &args.variant_a_file),
        (VARIANT_B, &args.variant_b, &args.variant_b_file),
    ] {
        for text in texts {
            form.append(key, text.as_str());
        }
        for path in files {
            form.append(key, read_snippet(path)?);
        }
    }
    Ok(form)
}

fn read_snippet(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snippet file {}", path.display()))
}
