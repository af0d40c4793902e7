mod create;
mod draft;
mod history;
mod scraped;
mod show;
mod status;
mod watch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `plx project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Draft {
            name,
            creator,
            description,
            tags,
        } => draft::run(name, creator, description, tags, flags),
        ProjectCommands::Create(args) => create::run(args, ctx, flags).await,
        ProjectCommands::Show { id } => show::run(id, ctx, flags).await,
        ProjectCommands::Status { id } => status::run(id, ctx, flags).await,
        ProjectCommands::Watch { id } => watch::run(id, ctx, flags).await,
        ProjectCommands::Scraped { id, file, variant } => {
            scraped::run(id, file.as_deref(), variant.as_deref(), ctx, flags).await
        }
        ProjectCommands::History { id, item, by_score } => {
            history::run(id, item.as_deref(), *by_score, ctx, flags).await
        }
    }
}
