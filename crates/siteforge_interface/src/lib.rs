//! Trait definitions for siteforge generation backends.

use async_trait::async_trait;
use siteforge_core::{GenerateRequest, GenerateResponse};
use siteforge_error::SiteforgeError;

/// A text-generation backend.
///
/// The pipeline and the HTTP surface are generic over this trait so tests can
/// substitute a canned backend for the remote API.
#[async_trait]
pub trait SiteforgeDriver: Send + Sync {
    /// Sends one request to the backend and returns its reply.
    ///
    /// The call is synchronous from the caller's perspective: it blocks the
    /// interaction until the backend answers or errors. Remote failures
    /// (network, auth, quota, timeout) surface as [`SiteforgeError::Gemini`].
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, SiteforgeError>;

    /// The model identifier this backend targets.
    fn model_name(&self) -> &str;
}
