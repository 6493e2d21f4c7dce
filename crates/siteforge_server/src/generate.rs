//! The generation pipeline: prompt in, packaged site out.

use crate::prompt::SYSTEM_INSTRUCTION;
use derive_getters::Getters;
use siteforge_bundle::{link_assets, pack_site, split_artifact};
use siteforge_core::{GenerateRequest, Input, Message, Role, SiteArtifact};
use siteforge_error::{GeminiError, GeminiErrorKind, SiteforgeError, SiteforgeResult};
use siteforge_interface::SiteforgeDriver;
use tracing::{debug, info, instrument, warn};

/// Output of one generation cycle: the artifact and its packaged archive.
///
/// Lives for the duration of the response that carries it; nothing is
/// retained between cycles.
#[derive(Debug, Clone, Getters)]
pub struct GeneratedSite {
    /// The three extracted payloads, markup already asset-linked
    artifact: SiteArtifact,
    /// Deflate-compressed zip of the three entries
    archive: Vec<u8>,
}

/// Runs the linear prompt-to-archive flow against a generation backend.
pub struct SiteGenerator<D> {
    driver: D,
    model: String,
}

impl<D: SiteforgeDriver> SiteGenerator<D> {
    /// Creates a generator over the given backend and model.
    pub fn new(driver: D, model: impl Into<String>) -> Self {
        Self {
            driver,
            model: model.into(),
        }
    }

    /// Generates a packaged site from a user prompt.
    ///
    /// Blank prompts are rejected before any remote call. Remote failures,
    /// malformed replies, and packaging failures each surface as their own
    /// [`SiteforgeError`] variant; no archive is produced on any of them.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    pub async fn generate(&self, prompt: &str) -> SiteforgeResult<GeneratedSite> {
        if prompt.trim().is_empty() {
            warn!("blank prompt, no generation attempted");
            return Err(SiteforgeError::EmptyPrompt);
        }

        let request = GenerateRequest::builder()
            .messages(vec![
                Message::new(
                    Role::System,
                    vec![Input::Text(SYSTEM_INSTRUCTION.to_string())],
                ),
                Message::new(Role::User, vec![Input::Text(prompt.to_string())]),
            ])
            .model(Some(self.model.clone()))
            .build()
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::InvalidRequest(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await?;
        let raw = response.text();
        debug!(reply_len = raw.len(), "reply received");

        let artifact = split_artifact(&raw)?;
        let artifact = SiteArtifact::new(
            link_assets(artifact.markup()),
            artifact.styling().clone(),
            artifact.scripting().clone(),
        );

        let archive = pack_site(&artifact)?;
        info!(archive_bytes = archive.len(), "site packaged");

        Ok(GeneratedSite { artifact, archive })
    }
}
