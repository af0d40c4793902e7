use std::io;
use std::sync::Arc;

use anyhow::bail;
use plx_client::poller::{PollSession, PollState};
use plx_core::responses::WatchResponse;
use tracing::warn;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_report;
use crate::progress::Progress;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let session = PollSession::spawn(Arc::clone(&ctx.client), id, ctx.poll_settings());
    let response = follow(session).await?;
    print(&response, flags)
}

/// Echo poll progress until the session redirects. Ctrl-C ends the session.
pub async fn follow(session: PollSession) -> anyhow::Result<WatchResponse> {
    follow_until(session, tokio::signal::ctrl_c()).await
}

async fn follow_until<F>(session: PollSession, interrupt: F) -> anyhow::Result<WatchResponse>
where
    F: Future<Output = io::Result<()>>,
{
    let mut updates = session.subscribe();
    let initial = updates.borrow_and_update().clone();
    let progress = Progress::spinner(&spinner_message(&initial));
    let mut shown = Vec::new();
    echo_new_lines(&progress, &mut shown, &initial.log);

    tokio::pin!(interrupt);
    let mut listening = true;
    let interrupted = loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break false;
                }
                let state = updates.borrow_and_update().clone();
                progress.set_message(&spinner_message(&state));
                echo_new_lines(&progress, &mut shown, &state.log);
                if state.navigate_to.is_some() {
                    break false;
                }
            }
            signal = &mut interrupt, if listening => match signal {
                Ok(()) => break true,
                Err(error) => {
                    warn!(%error, "cannot listen for Ctrl-C");
                    listening = false;
                }
            },
        }
    };

    let state = session.snapshot();
    drop(session);

    if interrupted {
        progress.finish_err("interrupted");
        bail!(
            "stopped watching project {} while it was {}",
            state.project_id,
            state.status
        );
    }
    let Some(navigate_to) = state.navigate_to.clone() else {
        progress.finish_err("polling stopped");
        bail!("status polling for project {} ended early", state.project_id);
    };
    progress.finish_clear();

    Ok(WatchResponse {
        status: state.status_label(),
        project_id: state.project_id,
        log: state.log,
        navigate_to: Some(navigate_to),
    })
}

pub fn print(response: &WatchResponse, flags: &GlobalFlags) -> anyhow::Result<()> {
    output_report(response, flags.format, |r| {
        format!(
            "Project {} is {}. Open it with `plx project show {}`.",
            r.project_id, r.status, r.project_id
        )
    })
}

fn spinner_message(state: &PollState) -> String {
    format!("[{}] {}", state.status_label(), state.project_id)
}

/// Print the part of `log` that differs from what was already shown.
///
/// A replaced log usually shares its head with the previous one, so only the
/// new tail is echoed.
fn echo_new_lines(progress: &Progress, shown: &mut Vec<String>, log: &[String]) {
    let common = shown
        .iter()
        .zip(log)
        .take_while(|(before, now)| before == now)
        .count();
    for line in &log[common..] {
        progress.println(line);
    }
    *shown = log.to_vec();
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use plx_client::actions::ActionResult;
    use plx_client::poller::{PollSettings, StatusSource};
    use plx_core::entities::ProjectStatus;
    use plx_core::enums::ProjectState;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Fixed(ProjectState);

    impl StatusSource for Fixed {
        fn check_status(
            &self,
            _project_id: &str,
        ) -> impl Future<Output = ActionResult<ProjectStatus>> + Send {
            std::future::ready(Ok(ProjectStatus {
                status: self.0.clone(),
                last_updated: String::new(),
                message: "fetching".into(),
            }))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn interrupt_survives_status_updates() {
        let session = PollSession::spawn(
            Arc::new(Fixed(ProjectState::Scraping)),
            "p1",
            PollSettings::default(),
        );
        // Fires after two status updates have been echoed.
        let interrupt = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        };

        let err = follow_until(session, interrupt).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "stopped watching project p1 while it was scraping"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unavailable_interrupt_still_follows_to_redirect() {
        let session = PollSession::spawn(
            Arc::new(Fixed(ProjectState::Ready)),
            "p1",
            PollSettings::default(),
        );
        let interrupt = std::future::ready(Err(io::Error::other("no signal handler")));

        let response = follow_until(session, interrupt).await.unwrap();
        assert_eq!(response.status, "READY");
        assert_eq!(response.navigate_to.as_deref(), Some("/project/p1"));
    }
}
