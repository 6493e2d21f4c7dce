//! Configuration for the siteforge process.

use derive_getters::Getters;
use siteforge_error::ConfigError;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";
/// Default bind address for the web interface.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Process-wide configuration, loaded once at startup and passed down
/// explicitly. Business logic never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct AppConfig {
    /// Credential for the generation backend
    api_key: String,
    /// Model identifier to generate with
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Address the web interface binds to
    #[builder(default = "DEFAULT_ADDR.to_string()")]
    bind_addr: String,
}

impl AppConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required; absence is fatal before any UI is shown)
    /// - `SITEFORGE_MODEL` (default: "gemini-2.5-flash-lite")
    /// - `SITEFORGE_ADDR` (default: "127.0.0.1:8080")
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::new("GEMINI_API_KEY not set"))?;
        let model =
            std::env::var("SITEFORGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let bind_addr =
            std::env::var("SITEFORGE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        Ok(AppConfigBuilder::default()
            .api_key(api_key)
            .model(model)
            .bind_addr(bind_addr)
            .build()
            .expect("Valid AppConfig"))
    }

    /// Returns this config with the bind address replaced.
    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.bind_addr = bind_addr.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = AppConfigBuilder::default()
            .api_key("test-key")
            .build()
            .unwrap();

        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.bind_addr(), DEFAULT_ADDR);
    }

    #[test]
    fn bind_addr_override_keeps_the_rest() {
        let config = AppConfigBuilder::default()
            .api_key("test-key")
            .build()
            .unwrap()
            .with_bind_addr("0.0.0.0:3000");

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.api_key(), "test-key");
    }
}
