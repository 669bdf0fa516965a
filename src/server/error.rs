//! Error types for the HTTP API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Malformed request bodies never reach application code; axum's `Json`
/// extractor rejects them before a handler runs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup of a conversation id that was never saved.
    #[error("Conversation not found")]
    ConversationNotFound,
}

impl ApiError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::ConversationNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
