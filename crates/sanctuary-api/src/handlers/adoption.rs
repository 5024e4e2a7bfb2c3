//! Adoption request handlers for applicants.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sanctuary_entity::adoption::AdoptionRequest;

use crate::dto::request::SubmitAdoptionRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/adoptions
pub async fn submit_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<SubmitAdoptionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AdoptionRequest>>), ApiError> {
    let request = state
        .adoption_service
        .submit(&auth, req.puppy_id, req.application)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}

/// GET /api/adoptions
pub async fn list_my_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .adoption_service
        .list_mine(&auth, params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/adoptions/{id}
pub async fn get_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdoptionRequest>>, ApiError> {
    let request = state.adoption_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}
