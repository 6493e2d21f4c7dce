//! Role types for exchange participants.

use serde::{Deserialize, Serialize};

/// Who authored a message in the generation exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    System,
    User,
    Assistant,
}
