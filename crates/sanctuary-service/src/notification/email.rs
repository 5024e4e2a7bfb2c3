//! Outbound transactional email through an HTTP email API.

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use sanctuary_core::config::notify::EmailConfig;
use sanctuary_core::error::{AppError, ErrorKind};
use sanctuary_core::result::AppResult;

/// Sends transactional email through a Resend-style HTTP API.
///
/// When sending is disabled in configuration, every send is a logged no-op
/// so the rest of the application behaves identically in development.
#[derive(Debug, Clone)]
pub struct EmailDispatcher {
    /// Email configuration.
    config: EmailConfig,
    /// Shared HTTP client.
    client: Client,
}

/// Request body for the email API.
#[derive(Debug, Serialize)]
struct OutboundEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl EmailDispatcher {
    /// Creates a new email dispatcher.
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Public site URL used when composing links in email bodies.
    pub fn site_url(&self) -> &str {
        &self.config.site_url
    }

    /// Sends mail to an applicant from the user-facing sender address.
    pub async fn send_to_user(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        self.send(OutboundEmail {
            from: &self.config.from_address,
            to,
            subject,
            html,
            reply_to: None,
        })
        .await
    }

    /// Sends an alert to the sanctuary admin inbox.
    pub async fn send_admin_alert(
        &self,
        subject: &str,
        html: &str,
        reply_to: Option<&str>,
    ) -> AppResult<()> {
        self.send(OutboundEmail {
            from: &self.config.alert_from_address,
            to: &self.config.admin_address,
            subject,
            html,
            reply_to,
        })
        .await
    }

    async fn send(&self, email: OutboundEmail<'_>) -> AppResult<()> {
        if !self.config.enabled {
            debug!(to = %email.to, subject = %email.subject, "Email sending disabled, skipping");
            return Ok(());
        }

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&email)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Email API request failed", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Email API returned {status}: {body}"
            )));
        }

        info!(to = %email.to, subject = %email.subject, "Email dispatched");
        Ok(())
    }
}
