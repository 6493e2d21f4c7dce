//! The generated site artifact and its delimiters.

use serde::{Deserialize, Serialize};

/// Literal token delimiting the HTML payload in a model reply.
pub const HTML_MARKER: &str = "--html--";
/// Literal token delimiting the CSS payload in a model reply.
pub const CSS_MARKER: &str = "--css--";
/// Literal token delimiting the JavaScript payload in a model reply.
pub const JS_MARKER: &str = "--js--";

/// Archive entry name for the markup payload.
pub const MARKUP_ENTRY: &str = "index.html";
/// Archive entry name for the styling payload.
pub const STYLE_ENTRY: &str = "style.css";
/// Archive entry name for the scripting payload.
pub const SCRIPT_ENTRY: &str = "script.js";

/// The three text payloads generated for one user prompt.
///
/// Constructed by the reply splitter, consumed by the packager, never
/// persisted independently.
///
/// # Examples
///
/// ```
/// use siteforge_core::SiteArtifact;
///
/// let artifact = SiteArtifact::new("<html></html>", "body {}", "console.log(1)");
/// assert_eq!(artifact.styling(), "body {}");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct SiteArtifact {
    /// The HTML payload
    markup: String,
    /// The CSS payload
    styling: String,
    /// The JavaScript payload
    scripting: String,
}

impl SiteArtifact {
    /// Creates a new artifact from the three payloads.
    pub fn new(
        markup: impl Into<String>,
        styling: impl Into<String>,
        scripting: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            styling: styling.into(),
            scripting: scripting.into(),
        }
    }

    /// Returns a builder for constructing a SiteArtifact.
    pub fn builder() -> SiteArtifactBuilder {
        SiteArtifactBuilder::default()
    }
}
