//! Support chat handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use sanctuary_entity::chat::{ChatMessage, Conversation};

use crate::dto::request::SendMessageRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/chat/conversation
pub async fn open_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Conversation>>, ApiError> {
    let conversation = state.chat_service.open_conversation(&auth).await?;
    Ok(Json(ApiResponse::ok(conversation)))
}

/// GET /api/chat/conversations (admin)
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .chat_service
        .list_conversations(&auth, params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/chat/conversations/{id}/messages
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .chat_service
        .list_messages(&auth, id, params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// POST /api/chat/conversations/{id}/messages
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<ApiResponse<ChatMessage>>, ApiError> {
    let message = state.chat_service.send_message(&auth, id, &req.text).await?;
    Ok(Json(ApiResponse::ok(message)))
}
