//! Best-effort web push delivery with VAPID authorization.
//!
//! Messages are sent as payloadless wake-up pings signed per RFC 8292; the
//! service worker fetches display content from the notifications API when
//! it wakes. Subscriptions the push service reports gone (404/410) are
//! pruned.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use futures::future::join_all;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use reqwest::{Client, StatusCode, Url};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use sanctuary_core::config::notify::PushConfig;
use sanctuary_database::repositories::push_subscription::PushSubscriptionRepository;
use sanctuary_entity::push::subscription::PushSubscription;

/// VAPID token claims (RFC 8292 section 2).
#[derive(Debug, Serialize)]
struct VapidClaims<'a> {
    /// Push service origin.
    aud: &'a str,
    /// Expiration, at most 24 hours out.
    exp: i64,
    /// Contact URI for the application server.
    sub: &'a str,
}

/// Delivers web push notifications to registered subscriptions.
///
/// Every send is best-effort: failures are logged and swallowed, never
/// surfaced to the caller.
#[derive(Clone)]
pub struct PushDispatcher {
    /// Push configuration.
    config: PushConfig,
    /// Subscription repository, for lookup and pruning.
    push_repo: Arc<PushSubscriptionRepository>,
    /// Shared HTTP client.
    client: Client,
    /// ES256 signing key decoded from the configured VAPID private key.
    encoding_key: Option<EncodingKey>,
}

impl std::fmt::Debug for PushDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushDispatcher")
            .field("enabled", &self.config.enabled)
            .field("has_key", &self.encoding_key.is_some())
            .finish()
    }
}

impl PushDispatcher {
    /// Creates a new push dispatcher.
    ///
    /// The VAPID private key is expected as base64url-encoded PKCS#8 DER.
    /// An unparseable key disables sending with a warning rather than
    /// failing startup.
    pub fn new(config: PushConfig, push_repo: Arc<PushSubscriptionRepository>) -> Self {
        let encoding_key = if config.enabled {
            match URL_SAFE_NO_PAD.decode(config.vapid_private_key.trim_end_matches('=')) {
                Ok(der) => Some(EncodingKey::from_ec_der(&der)),
                Err(e) => {
                    warn!(error = %e, "Invalid VAPID private key, push sending disabled");
                    None
                }
            }
        } else {
            None
        };

        Self {
            config,
            push_repo,
            client: Client::new(),
            encoding_key,
        }
    }

    /// Sends a push notification to every subscription a user registered.
    pub async fn send_to_user(&self, user_id: Uuid, title: &str, body: &str, link: &str) {
        let Some(key) = &self.encoding_key else {
            return;
        };

        let subscriptions = match self.push_repo.find_by_user(user_id).await {
            Ok(subscriptions) => subscriptions,
            Err(e) => {
                warn!(error = %e, user_id = %user_id, "Failed to load push subscriptions");
                return;
            }
        };
        if subscriptions.is_empty() {
            return;
        }

        debug!(
            user_id = %user_id,
            title = %title,
            body = %body,
            link = %link,
            count = subscriptions.len(),
            "Dispatching push notifications"
        );

        join_all(subscriptions.iter().map(|sub| self.deliver(key, sub))).await;
    }

    /// Sends a push notification to every subscription of several users.
    pub async fn send_to_users(&self, user_ids: &[Uuid], title: &str, body: &str, link: &str) {
        join_all(
            user_ids
                .iter()
                .map(|user_id| self.send_to_user(*user_id, title, body, link)),
        )
        .await;
    }

    async fn deliver(&self, key: &EncodingKey, subscription: &PushSubscription) {
        let audience = match Url::parse(&subscription.endpoint) {
            Ok(url) => url.origin().ascii_serialization(),
            Err(e) => {
                warn!(error = %e, "Push subscription has an invalid endpoint");
                return;
            }
        };

        let claims = VapidClaims {
            aud: &audience,
            exp: (Utc::now() + Duration::hours(12)).timestamp(),
            sub: &self.config.vapid_subject,
        };
        let token = match encode(&Header::new(Algorithm::ES256), &claims, key) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = %e, "Failed to sign VAPID token");
                return;
            }
        };

        let result = self
            .client
            .post(&subscription.endpoint)
            .header(
                "Authorization",
                format!("vapid t={token}, k={}", self.config.vapid_public_key),
            )
            .header("TTL", self.config.ttl_seconds.to_string())
            .send()
            .await;

        match result {
            Ok(response)
                if response.status() == StatusCode::NOT_FOUND
                    || response.status() == StatusCode::GONE =>
            {
                debug!(endpoint = %subscription.endpoint, "Subscription expired, pruning");
                if let Err(e) = self.push_repo.delete_by_endpoint(&subscription.endpoint).await {
                    warn!(error = %e, "Failed to prune expired subscription");
                }
            }
            Ok(response) if !response.status().is_success() => {
                warn!(
                    status = %response.status(),
                    endpoint = %subscription.endpoint,
                    "Push service rejected message"
                );
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Push delivery failed");
            }
        }
    }
}
