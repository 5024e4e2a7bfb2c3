//! Public contact form handler.

use axum::Json;
use axum::extract::State;
use tracing::info;
use validator::Validate;

use sanctuary_core::error::AppError;

use crate::dto::request::ContactRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/contact
///
/// Forwards a contact form submission to the sanctuary inbox, with the
/// sender's address as reply-to. Unauthenticated.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let subject = format!("Contact Form: {}", req.subject);
    let html = contact_email_html(&req.name, &req.email, &req.message);

    state
        .email
        .send_admin_alert(&subject, &html, Some(&req.email))
        .await?;

    info!(subject = %req.subject, "Contact form forwarded");

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Your message has been sent".to_string(),
    })))
}

fn contact_email_html(name: &str, email: &str, message: &str) -> String {
    let name = escape_html(name);
    let email = escape_html(email);
    let message = escape_html(message);
    format!(
        "<div style=\"font-family: sans-serif; padding: 20px; border: 1px solid #eee; \
         border-radius: 10px;\">\
         <h2 style=\"color: #4a3728;\">New Contact Form Message</h2>\
         <p><strong>From:</strong> {name} ({email})</p>\
         <p style=\"white-space: pre-wrap;\">{message}</p>\
         </div>"
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
