//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Analysis method used by `plx query` when `--model` is omitted.
    /// Empty means "first method the backend lists".
    #[serde(default)]
    pub default_model: String,
}

impl GeneralConfig {
    #[must_use]
    pub fn default_model(&self) -> Option<&str> {
        Some(self.default_model.trim()).filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_default_model_is_none() {
        let mut config = GeneralConfig::default();
        assert!(config.default_model().is_none());
        config.default_model = "  ".into();
        assert!(config.default_model().is_none());
        config.default_model = "multi_agent_debate".into();
        assert_eq!(config.default_model(), Some("multi_agent_debate"));
    }
}
