//! Types for conversation storage.

use serde::{Deserialize, Serialize};

/// A single message within a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Speaker role, e.g. "user" or "assistant". Not validated.
    pub role: String,
    /// Message content.
    pub content: String,
}
