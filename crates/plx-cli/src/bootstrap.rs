use anyhow::Context;
use plx_config::ParallaxConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<ParallaxConfig> {
    ParallaxConfig::load_with_dotenv().context("failed to load parallax configuration")
}
