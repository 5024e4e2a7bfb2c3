//! Admin handlers for puppy catalog management.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use sanctuary_entity::puppy::{CreatePuppy, Puppy, UpdatePuppy};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/admin/puppies
pub async fn create_puppy(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePuppy>,
) -> Result<(StatusCode, Json<ApiResponse<Puppy>>), ApiError> {
    let puppy = state.puppy_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(puppy))))
}

/// PUT /api/admin/puppies/{id}
pub async fn update_puppy(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePuppy>,
) -> Result<Json<ApiResponse<Puppy>>, ApiError> {
    let puppy = state.puppy_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(puppy)))
}

/// DELETE /api/admin/puppies/{id}
pub async fn delete_puppy(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.puppy_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Puppy deleted".to_string(),
    })))
}
