//! HTTP route handlers for the IntelliChat API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::chat;
use crate::conversations::Message;

use super::error::ApiError;
use super::state::{AppState, SERVICE_NAME};

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_info))
        .route("/health", get(health_check))
        .route("/chat", post(chat_message))
        .route("/conversations", get(list_conversations))
        .route(
            "/conversations/{id}",
            post(save_conversation).get(get_conversation),
        )
        .with_state(state)
}

/// Service description returned from the root endpoint.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Full API name.
    pub name: String,
    /// Crate version.
    pub version: String,
    /// Service status indicator.
    pub status: String,
    /// Available endpoint paths.
    pub endpoints: Vec<String>,
}

/// Root endpoint with API information.
async fn root_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: format!("{SERVICE_NAME} Assistant API"),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "active".to_string(),
        endpoints: vec![
            "/chat".to_string(),
            "/health".to_string(),
            "/conversations".to_string(),
        ],
    })
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// Chat request.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Prior messages in the conversation. Accepted but not yet used for
    /// response selection.
    #[serde(default)]
    pub conversation_history: Vec<Message>,
}

/// Chat response.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub response: String,
    /// RFC 3339 timestamp taken when the response was generated.
    pub timestamp: String,
}

/// Handle chat requests with a deterministically selected canned reply.
async fn chat_message(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let response = chat::select_response(&request.message);

    Json(ChatResponse {
        response: response.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Listing of all stored conversation ids.
#[derive(Debug, Serialize)]
pub struct ConversationListResponse {
    /// Known conversation ids.
    pub conversations: Vec<String>,
    /// Number of ids.
    pub count: usize,
}

/// List all conversation ids.
async fn list_conversations(State(state): State<Arc<AppState>>) -> Json<ConversationListResponse> {
    let conversations = state.conversations.list_ids();
    let count = conversations.len();

    Json(ConversationListResponse {
        conversations,
        count,
    })
}

/// Acknowledgement for a saved conversation.
#[derive(Debug, Serialize)]
pub struct SaveConversationResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The id the conversation was saved under.
    pub id: String,
}

/// Save a conversation, replacing any prior content at the same id.
async fn save_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(messages): Json<Vec<Message>>,
) -> Json<SaveConversationResponse> {
    tracing::debug!(id = %id, messages = messages.len(), "saving conversation");
    state.conversations.save(&id, messages);

    Json(SaveConversationResponse {
        message: "Conversation saved".to_string(),
        id,
    })
}

/// A stored conversation.
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    /// Conversation id.
    pub id: String,
    /// Stored messages in insertion order.
    pub messages: Vec<Message>,
}

/// Fetch a stored conversation by id.
async fn get_conversation(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ConversationResponse>, ApiError> {
    let messages = state
        .conversations
        .get(&id)
        .ok_or(ApiError::ConversationNotFound)?;

    Ok(Json(ConversationResponse { id, messages }))
}
