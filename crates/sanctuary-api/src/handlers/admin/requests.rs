//! Admin handlers for the adoption request lifecycle.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use sanctuary_entity::adoption::{AdoptionRequest, RequestStatus};

use crate::dto::request::TransitionStatusRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Optional status filter for the admin request listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestFilterParams {
    /// Only return requests with this status.
    pub status: Option<RequestStatus>,
}

/// GET /api/admin/requests
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<RequestFilterParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .adoption_service
        .list_all(&auth, params.into_page_request(), filter.status)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// PUT /api/admin/requests/{id}
pub async fn transition_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<TransitionStatusRequest>,
) -> Result<Json<ApiResponse<AdoptionRequest>>, ApiError> {
    let request = state
        .adoption_service
        .transition(&auth, id, &req.status)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// DELETE /api/admin/requests/{id}
pub async fn delete_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.adoption_service.remove(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Request deleted".to_string(),
    })))
}
