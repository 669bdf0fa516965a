//! Canned chat response selection.
//!
//! Placeholder for a real language-model integration: responses come from a
//! fixed list, selected by message length. A real implementation would replace
//! `select_response` while keeping the same contract.

/// The fixed set of reply strings.
pub const CANNED_RESPONSES: [&str; 5] = [
    "That's an interesting question! Let me help you with that.",
    "I understand. Here's what I think about that topic.",
    "Great question! Based on the information available, I'd say...",
    "Let me process that for you. Here's my analysis.",
    "Thank you for asking! Here's a thoughtful response.",
];

/// Pick a canned response for `message`.
///
/// Selection is the character count of the message modulo the list size, so
/// identical messages always get the same reply.
#[must_use]
pub fn select_response(message: &str) -> &'static str {
    CANNED_RESPONSES[message.chars().count() % CANNED_RESPONSES.len()]
}
