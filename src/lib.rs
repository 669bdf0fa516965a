//! IntelliChat: a minimal chat-assistant HTTP API with canned responses and
//! in-memory conversation storage.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_must_use)]

/// Canned chat response selection.
pub mod chat;
/// In-memory conversation storage.
pub mod conversations;
/// HTTP server and API routes.
pub mod server;
/// Entry helpers to start the IntelliChat service.
pub mod startup;
