//! Error types for the siteforge website generator.
//!
//! Each failure domain gets its own error type with source-location capture,
//! aggregated into [`SiteforgeError`] at the workspace boundary.

mod archive;
mod config;
mod extract;
mod gemini;
mod server;

pub use archive::ArchiveError;
pub use config::ConfigError;
pub use extract::{ExtractError, ExtractErrorKind, Segment};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use server::ServerError;

/// Workspace-level error variants.
///
/// Library crates return their domain error; callers that cross domain
/// boundaries (the generation pipeline, the HTTP surface) work in terms of
/// this enum, and user-visible severity derives from the variant.
#[derive(Debug, derive_more::From)]
pub enum SiteforgeError {
    /// Configuration error; fatal before the interface is served
    Config(ConfigError),
    /// Remote generation call failed (network, auth, quota, timeout)
    Gemini(GeminiError),
    /// The reply could not be split into the three site payloads
    Extract(ExtractError),
    /// Archive serialization failed
    Archive(ArchiveError),
    /// The HTTP surface failed to bind or serve
    Server(ServerError),
    /// The prompt was blank; no remote call was attempted
    #[from(ignore)]
    EmptyPrompt,
}

impl std::fmt::Display for SiteforgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteforgeError::Config(e) => write!(f, "{}", e),
            SiteforgeError::Gemini(e) => write!(f, "{}", e),
            SiteforgeError::Extract(e) => write!(f, "{}", e),
            SiteforgeError::Archive(e) => write!(f, "{}", e),
            SiteforgeError::Server(e) => write!(f, "{}", e),
            SiteforgeError::EmptyPrompt => write!(f, "prompt is empty"),
        }
    }
}

impl std::error::Error for SiteforgeError {}

/// Result type for siteforge operations.
pub type SiteforgeResult<T> = std::result::Result<T, SiteforgeError>;
