//! Token verification configuration.

use serde::{Deserialize, Serialize};

/// Bearer-token verification configuration.
///
/// Tokens are issued by the external identity provider; this application
/// only verifies them against the shared signing secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for JWT verification (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected token issuer. Empty disables the issuer check.
    #[serde(default)]
    pub issuer: String,
    /// Allowed clock skew in seconds when validating expiry.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_leeway() -> u64 {
    30
}
