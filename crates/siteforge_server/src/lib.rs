//! HTTP surface and generation pipeline for siteforge.
//!
//! One linear flow: capture a prompt, call the generation backend, split the
//! reply, link the assets, pack the archive, hand it back. The router is
//! generic over [`siteforge_interface::SiteforgeDriver`] so the whole surface
//! can be exercised against a canned backend.

mod api;
mod config;
mod generate;
mod prompt;

pub use api::{ApiState, create_router};
pub use config::{AppConfig, AppConfigBuilder, DEFAULT_ADDR, DEFAULT_MODEL};
pub use generate::{GeneratedSite, SiteGenerator};
pub use prompt::SYSTEM_INSTRUCTION;

use siteforge_error::{ServerError, SiteforgeResult};
use siteforge_interface::SiteforgeDriver;
use tracing::info;

/// Binds the configured address and serves the web interface until ctrl-c.
///
/// # Errors
///
/// Returns [`ServerError`] if the address cannot be bound or the server
/// fails while running.
pub async fn serve<D>(config: &AppConfig, driver: D) -> SiteforgeResult<()>
where
    D: SiteforgeDriver + 'static,
{
    let generator = SiteGenerator::new(driver, config.model().clone());
    let router = create_router(generator);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| ServerError::new(format!("failed to bind {}: {}", config.bind_addr(), e)))?;

    info!(addr = %config.bind_addr(), model = %config.model(), "siteforge listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(format!("server failed: {}", e)))?;

    info!("siteforge stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
}
