//! Backend API configuration.

use serde::{Deserialize, Serialize};

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "https://proj.12082004.xyz";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    String::from("parallax/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (no trailing slash needed).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds. Absent means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Base URL without trailing slashes, ready for `base + "/endpoint"`.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, "parallax/0.1");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8000//".into(),
            ..ApiConfig::default()
        };
        assert_eq!(config.trimmed_base_url(), "http://localhost:8000");
    }
}
