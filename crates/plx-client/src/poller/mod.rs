//! Status polling for a freshly created project.
//!
//! A [`PollSession`] checks the project status on a fixed interval until the
//! backend reports `ready`, then waits a short redirect delay and publishes
//! the detail route. Observers follow progress through a `watch` channel.
//!
//! ```text
//! spawn ─► tick ─► check (own task) ─► apply ─┬─► Continue ─► tick ...
//!                                             └─► Ready ─► delay ─► navigate_to
//! ```
//!
//! Dropping the session cancels the loop and aborts checks in flight.

mod state;

pub use state::{INITIAL_STATUS, PollPhase, PollState, READY_LINE, Transition};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use plx_config::PollConfig;
use plx_core::entities::ProjectStatus;
use plx_core::routes;
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::ApiClient;
use crate::actions::{ActionError, ActionResult, check_project_status_action};

/// Anything that can report a project's status.
pub trait StatusSource: Send + Sync + 'static {
    fn check_status(
        &self,
        project_id: &str,
    ) -> impl Future<Output = ActionResult<ProjectStatus>> + Send;
}

impl StatusSource for ApiClient {
    fn check_status(
        &self,
        project_id: &str,
    ) -> impl Future<Output = ActionResult<ProjectStatus>> + Send {
        check_project_status_action(self, project_id)
    }
}

/// Poll cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub redirect_delay: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::from(&PollConfig::default())
    }
}

impl From<&PollConfig> for PollSettings {
    fn from(config: &PollConfig) -> Self {
        Self {
            interval: config.interval(),
            redirect_delay: config.redirect_delay(),
        }
    }
}

/// Handle to a running poll loop.
pub struct PollSession {
    state: watch::Receiver<PollState>,
    cancellation_token: CancellationToken,
    task: JoinHandle<()>,
}

impl PollSession {
    /// Start polling `project_id`. The first check happens one interval
    /// after this call.
    pub fn spawn<S: StatusSource>(source: Arc<S>, project_id: &str, settings: PollSettings) -> Self {
        let (state_tx, state) = watch::channel(PollState::new(project_id));
        let cancellation_token = CancellationToken::new();
        let task = tokio::spawn(run(
            source,
            settings,
            state_tx,
            cancellation_token.clone(),
        ));
        Self {
            state,
            cancellation_token,
            task,
        }
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> PollState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PollState> {
        self.state.clone()
    }

    /// Wait for the redirect route. `None` if the session was cancelled first.
    pub async fn navigation(&self) -> Option<String> {
        let mut rx = self.state.clone();
        rx.wait_for(|state| state.navigate_to.is_some())
            .await
            .ok()
            .and_then(|state| state.navigate_to.clone())
    }

    /// Stop polling. Checks still in flight are aborted.
    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }
}

impl Drop for PollSession {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
        self.task.abort();
    }
}

async fn run<S: StatusSource>(
    source: Arc<S>,
    settings: PollSettings,
    state_tx: watch::Sender<PollState>,
    cancellation_token: CancellationToken,
) {
    let project_id = state_tx.borrow().project_id.clone();
    let mut ticker = time::interval_at(Instant::now() + settings.interval, settings.interval);
    let mut in_flight: JoinSet<ActionResult<ProjectStatus>> = JoinSet::new();

    loop {
        tokio::select! {
            biased;

            () = cancellation_token.cancelled() => {
                tracing::debug!(%project_id, "status polling cancelled");
                in_flight.abort_all();
                return;
            }
            Some(joined) = in_flight.join_next() => {
                let outcome = match joined {
                    Ok(outcome) => outcome,
                    Err(e) if e.is_cancelled() => continue,
                    Err(e) => Err(ActionError::Request(format!("status check task failed: {e}"))),
                };
                let mut transition = Transition::Continue;
                state_tx.send_modify(|state| transition = state.apply(outcome));
                if transition == Transition::Ready {
                    in_flight.abort_all();
                    break;
                }
            }
            _ = ticker.tick() => {
                tracing::debug!(%project_id, "checking project status");
                let source = Arc::clone(&source);
                let id = project_id.clone();
                in_flight.spawn(async move { source.check_status(&id).await });
            }
        }
    }

    tracing::info!(%project_id, "project ready");
    tokio::select! {
        () = cancellation_token.cancelled() => {}
        () = time::sleep(settings.redirect_delay) => {
            let route = routes::project_detail(&project_id);
            state_tx.send_modify(|state| state.navigate_to = Some(route));
        }
    }
}
