//! Input types for generation requests.

use serde::{Deserialize, Serialize};

/// Supported inputs to the generation backend.
///
/// The website pipeline only exchanges text: the system instruction and the
/// user's site description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
}
