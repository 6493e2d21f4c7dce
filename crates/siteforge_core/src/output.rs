//! Output types from generation replies.

use serde::{Deserialize, Serialize};

/// Supported outputs from the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),
}
