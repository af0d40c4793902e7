//! Status enums for Parallax entities.
//!
//! Wire values are `snake_case`; `ProjectState` keeps unrecognised values verbatim.

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

// ---------------------------------------------------------------------------
// ProjectState
// ---------------------------------------------------------------------------

/// Processing state of a project as reported by `/projectstatus`.
///
/// ```text
/// scraping → ready
/// ```
///
/// The backend only documents `ready` and `scraping`. Any other value is kept
/// verbatim in [`ProjectState::Other`] and treated as "not ready yet".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectState {
    Ready,
    Scraping,
    Other(String),
}

impl ProjectState {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ready => "ready",
            Self::Scraping => "scraping",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the project has finished scraping and can be queried.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl From<String> for ProjectState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ready" => Self::Ready,
            "scraping" => Self::Scraping,
            _ => Self::Other(raw),
        }
    }
}

impl From<ProjectState> for String {
    fn from(state: ProjectState) -> Self {
        match state {
            ProjectState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl JsonSchema for ProjectState {
    fn schema_name() -> Cow<'static, str> {
        "ProjectState".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}

impl fmt::Display for ProjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CreateStatus
// ---------------------------------------------------------------------------

/// Outcome flag on a `/createproject` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CreateStatus {
    Success,
    Failure,
}

impl CreateStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for CreateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_state_decodes_documented_values() {
        let ready: ProjectState = serde_json::from_str("\"ready\"").unwrap();
        let scraping: ProjectState = serde_json::from_str("\"scraping\"").unwrap();
        assert_eq!(ready, ProjectState::Ready);
        assert_eq!(scraping, ProjectState::Scraping);
        assert!(ready.is_ready());
        assert!(!scraping.is_ready());
    }

    #[test]
    fn project_state_keeps_unexpected_values_verbatim() {
        let state: ProjectState = serde_json::from_str("\"indexing\"").unwrap();
        assert_eq!(state, ProjectState::Other("indexing".into()));
        assert_eq!(state.as_str(), "indexing");
        assert!(!state.is_ready());
        assert_eq!(serde_json::to_string(&state).unwrap(), "\"indexing\"");
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(ProjectState::Scraping.to_string(), "scraping");
        assert_eq!(CreateStatus::Failure.to_string(), "failure");
    }
}
