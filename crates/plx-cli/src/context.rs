use std::sync::Arc;

use anyhow::Context;
use plx_client::ApiClient;
use plx_client::poller::PollSettings;
use plx_config::ParallaxConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub client: Arc<ApiClient>,
    pub config: ParallaxConfig,
}

impl AppContext {
    pub fn init(config: ParallaxConfig) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.api).context("failed to build backend HTTP client")?;
        tracing::debug!(base_url = client.base_url(), "backend client ready");
        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings::from(&self.config.poll)
    }
}
