//! Status polling cadence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_interval_ms() -> u64 {
    2_000
}

const fn default_redirect_delay_ms() -> u64 {
    1_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PollConfig {
    /// Delay between status checks.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Pause between observing `ready` and redirecting to the project.
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
        }
    }
}

impl PollConfig {
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    #[must_use]
    pub const fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
