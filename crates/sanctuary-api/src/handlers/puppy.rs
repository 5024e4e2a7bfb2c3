//! Public puppy catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use sanctuary_entity::puppy::{Puppy, PuppyStatus};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// Optional status filter for the puppy listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PuppyFilterParams {
    /// Only return puppies with this status.
    pub status: Option<PuppyStatus>,
}

/// GET /api/puppies
pub async fn list_puppies(
    State(state): State<AppState>,
    Query(filter): Query<PuppyFilterParams>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .puppy_service
        .list(params.into_page_request(), filter.status)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// GET /api/puppies/{id}
pub async fn get_puppy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Puppy>>, ApiError> {
    let puppy = state.puppy_service.get(id).await?;
    Ok(Json(ApiResponse::ok(puppy)))
}
