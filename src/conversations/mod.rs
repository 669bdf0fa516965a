//! In-memory conversation storage.
//!
//! A conversation is a named, ordered list of role/content messages. Entries
//! live for the lifetime of the process; there is no eviction and no
//! persistence.

pub mod store;
pub mod types;

pub use store::ConversationStore;
pub use types::Message;
