//! Poll session state and its transition on each status result.

use plx_core::entities::ProjectStatus;

use crate::actions::ActionResult;

pub const INITIAL_STATUS: &str = "Initializing...";
pub const READY_LINE: &str = "Project is ready! Redirecting...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    Polling,
    /// Terminal. No further checks are issued.
    Ready,
}

/// What the poll loop should do after applying a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Ready,
}

/// Snapshot of one polling session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub project_id: String,
    /// Last status reported by the backend, or [`INITIAL_STATUS`].
    pub status: String,
    pub log: Vec<String>,
    pub phase: PollPhase,
    /// Route to navigate to once the redirect delay has passed.
    pub navigate_to: Option<String>,
}

impl PollState {
    #[must_use]
    pub fn new(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            status: INITIAL_STATUS.to_string(),
            log: vec![created_line(project_id)],
            phase: PollPhase::Polling,
            navigate_to: None,
        }
    }

    /// Status label as displayed (`SCRAPING`).
    #[must_use]
    pub fn status_label(&self) -> String {
        self.status.to_uppercase()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == PollPhase::Ready
    }

    /// Fold one status result into the state.
    ///
    /// Errors are appended to the log. A non-empty backend message replaces
    /// the whole log, so results arriving out of order settle on the latest
    /// message applied.
    pub fn apply(&mut self, outcome: ActionResult<ProjectStatus>) -> Transition {
        if self.is_ready() {
            return Transition::Ready;
        }
        let status = match outcome {
            Ok(status) => status,
            Err(error) => {
                self.log.push(format!("Error checking status: {error}"));
                return Transition::Continue;
            }
        };

        self.status = status.status.as_str().to_string();
        if !status.message.is_empty() {
            self.log = std::iter::once(created_line(&self.project_id))
                .chain(status.log_lines())
                .collect();
        }

        if status.is_ready() {
            self.log.push(READY_LINE.to_string());
            self.phase = PollPhase::Ready;
            Transition::Ready
        } else {
            Transition::Continue
        }
    }
}

fn created_line(project_id: &str) -> String {
    format!("Project created with ID: {project_id}")
}
