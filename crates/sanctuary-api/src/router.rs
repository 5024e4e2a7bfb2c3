//! Route definitions for the Ellie's Sanctuary HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(health_routes())
        .merge(puppy_routes())
        .merge(adoption_routes())
        .merge(notification_routes())
        .merge(chat_routes())
        .merge(push_routes())
        .merge(user_routes())
        .merge(contact_routes())
        .merge(admin_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Public puppy catalog
fn puppy_routes() -> Router<AppState> {
    Router::new()
        .route("/puppies", get(handlers::puppy::list_puppies))
        .route("/puppies/{id}", get(handlers::puppy::get_puppy))
}

/// Adoption requests (applicant side)
fn adoption_routes() -> Router<AppState> {
    Router::new()
        .route("/adoptions", post(handlers::adoption::submit_request))
        .route("/adoptions", get(handlers::adoption::list_my_requests))
        .route("/adoptions/{id}", get(handlers::adoption::get_request))
}

/// In-app notifications
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
}

/// Support chat
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chat/conversation", post(handlers::chat::open_conversation))
        .route("/chat/conversations", get(handlers::chat::list_conversations))
        .route(
            "/chat/conversations/{id}/messages",
            get(handlers::chat::list_messages),
        )
        .route(
            "/chat/conversations/{id}/messages",
            post(handlers::chat::send_message),
        )
}

/// Browser push subscriptions
fn push_routes() -> Router<AppState> {
    Router::new()
        .route("/push/subscriptions", post(handlers::push::subscribe))
        .route("/push/subscriptions", delete(handlers::push::unsubscribe))
}

/// User self-service
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::get_profile))
        .route("/users/me/sync", post(handlers::user::sync_profile))
}

/// Public contact form
fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(handlers::contact::submit_contact))
}

/// Administrator endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/requests",
            get(handlers::admin::requests::list_requests),
        )
        .route(
            "/admin/requests/{id}",
            put(handlers::admin::requests::transition_request),
        )
        .route(
            "/admin/requests/{id}",
            delete(handlers::admin::requests::delete_request),
        )
        .route("/admin/puppies", post(handlers::admin::puppies::create_puppy))
        .route(
            "/admin/puppies/{id}",
            put(handlers::admin::puppies::update_puppy),
        )
        .route(
            "/admin/puppies/{id}",
            delete(handlers::admin::puppies::delete_puppy),
        )
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::users::change_role),
        )
}
