//! Serve command handler.

use siteforge_models::GeminiClient;
use siteforge_server::AppConfig;

/// Handle the `serve` command.
///
/// Configuration is loaded before anything binds: a missing credential is
/// fatal here, and no interface is ever shown.
pub async fn handle_serve_command(addr: Option<String>) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(addr) = addr {
        config = config.with_bind_addr(addr);
    }

    tracing::info!(model = %config.model(), "starting siteforge");

    let driver = GeminiClient::new(config.api_key().clone(), config.model())?;
    siteforge_server::serve(&config, driver).await?;

    Ok(())
}
