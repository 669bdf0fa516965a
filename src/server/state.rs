//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::conversations::ConversationStore;

/// Display name of the service.
pub const SERVICE_NAME: &str = "IntelliChat AI";

/// Shared application state.
pub struct AppState {
    /// Conversation storage for the lifetime of the process.
    pub conversations: ConversationStore,
}

impl AppState {
    /// Create a new application state with an empty conversation store.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            conversations: ConversationStore::new(),
        })
    }
}
