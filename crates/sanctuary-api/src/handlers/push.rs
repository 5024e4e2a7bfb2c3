//! Push subscription handlers.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::dto::request::{PushSubscribeRequest, PushUnsubscribeRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/push/subscriptions
pub async fn subscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PushSubscribeRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .push_repo
        .upsert(auth.user_id, &req.endpoint, &req.subscription)
        .await?;

    debug!(user_id = %auth.user_id, "Push subscription registered");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Subscription registered".to_string(),
    })))
}

/// DELETE /api/push/subscriptions
pub async fn unsubscribe(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<PushUnsubscribeRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.push_repo.delete(auth.user_id, &req.endpoint).await?;

    debug!(user_id = %auth.user_id, "Push subscription removed");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Subscription removed".to_string(),
    })))
}
