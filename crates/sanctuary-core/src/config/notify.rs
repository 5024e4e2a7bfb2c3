//! Email and push notification configuration.

use serde::{Deserialize, Serialize};

/// Outbound notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Transactional email settings.
    #[serde(default)]
    pub email: EmailConfig,
    /// Web push settings.
    #[serde(default)]
    pub push: PushConfig,
}

/// Transactional email configuration (HTTP email API).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether email sending is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the email API endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key for the email service.
    #[serde(default)]
    pub api_key: String,
    /// Sender address for applicant-facing mail.
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Sender address for admin alert mail.
    #[serde(default = "default_alert_from_address")]
    pub alert_from_address: String,
    /// Recipient address for admin alerts.
    #[serde(default = "default_admin_address")]
    pub admin_address: String,
    /// Public site URL used in email links.
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: default_api_url(),
            api_key: String::new(),
            from_address: default_from_address(),
            alert_from_address: default_alert_from_address(),
            admin_address: default_admin_address(),
            site_url: default_site_url(),
        }
    }
}

/// Web push configuration (VAPID).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PushConfig {
    /// Whether push sending is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// VAPID subject (`mailto:` or site URL).
    #[serde(default)]
    pub vapid_subject: String,
    /// Base64url-encoded VAPID public key.
    #[serde(default)]
    pub vapid_public_key: String,
    /// Base64url-encoded VAPID private key (PKCS#8 PEM or raw scalar).
    #[serde(default)]
    pub vapid_private_key: String,
    /// Push message TTL in seconds.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: u64,
}

fn default_api_url() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_from_address() -> String {
    "Ellie's Sanctuary <hello@elliesbichonsanctuary.com>".to_string()
}

fn default_alert_from_address() -> String {
    "Ellie's Sanctuary <notifications@elliesbichonsanctuary.com>".to_string()
}

fn default_admin_address() -> String {
    "admin@elliesbichonsanctuary.com".to_string()
}

fn default_site_url() -> String {
    "https://elliesbichonsanctuary.com".to_string()
}

fn default_ttl() -> u64 {
    86400
}
