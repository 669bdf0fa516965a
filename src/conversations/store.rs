//! Thread-safe in-memory conversation store.

use dashmap::DashMap;

use super::types::Message;

/// In-memory mapping from conversation id to its ordered message list.
///
/// Saves replace the stored list wholesale; concurrent saves to the same id
/// resolve last-writer-wins at the granularity of a single map entry.
#[derive(Default)]
pub struct ConversationStore {
    inner: DashMap<String, Vec<Message>>,
}

impl ConversationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// All currently known conversation ids, in no particular order.
    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        self.inner.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of distinct conversations saved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store holds no conversations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Insert or replace the conversation at `id`. Any prior value is
    /// discarded.
    pub fn save(&self, id: &str, messages: Vec<Message>) {
        self.inner.insert(id.to_string(), messages);
    }

    /// The stored messages for `id`, or `None` if the id was never saved.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Vec<Message>> {
        self.inner.get(id).map(|entry| entry.value().clone())
    }
}
