use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ProjectState;

/// Response of `GET /projectstatus`.
///
/// `message` carries the backend's current log window: the complete set of
/// progress lines, newline-separated. Each poll replaces the previous window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectStatus {
    pub status: ProjectState,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub message: String,
}

impl ProjectStatus {
    /// Non-blank lines of the log window, in order.
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        self.message
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.status.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn status(message: &str) -> ProjectStatus {
        ProjectStatus {
            status: ProjectState::Scraping,
            last_updated: "2025-12-23T10:00:00Z".into(),
            message: message.into(),
        }
    }

    #[test]
    fn log_lines_drop_blank_lines() {
        assert_eq!(status("line1\nline2\n\n").log_lines(), vec!["line1", "line2"]);
    }

    #[test]
    fn log_lines_drop_whitespace_only_lines() {
        assert_eq!(
            status("  \nfetching https://a\n\t\nparsed 3 files").log_lines(),
            vec!["fetching https://a", "parsed 3 files"]
        );
    }

    #[test]
    fn empty_message_has_no_lines() {
        assert!(status("").log_lines().is_empty());
    }
}
