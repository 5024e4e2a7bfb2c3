//! Admin handlers for user management.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use sanctuary_entity::user::User;

use crate::dto::request::ChangeRoleRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let result = state
        .user_service
        .list_users(&auth, params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": result })))
}

/// PUT /api/admin/users/{id}/role
pub async fn change_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.change_role(&auth, id, req.role).await?;
    Ok(Json(ApiResponse::ok(user)))
}
