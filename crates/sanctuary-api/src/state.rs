//! Shared application state threaded through every handler.

use std::sync::Arc;

use sanctuary_auth::TokenVerifier;
use sanctuary_core::config::AppConfig;
use sanctuary_core::events::EventBus;
use sanctuary_database::DatabasePool;
use sanctuary_database::repositories::push_subscription::PushSubscriptionRepository;
use sanctuary_service::chat::ChatService;
use sanctuary_service::notification::{EmailDispatcher, NotificationService, PushDispatcher};
use sanctuary_service::{AdoptionService, PuppyService, UserService};

/// Application state available to all handlers via Axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────────
    /// Loaded application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────────
    /// Database pool, used directly by health checks.
    pub db: DatabasePool,
    /// Domain event bus.
    pub event_bus: EventBus,
    /// Verifier for provider-issued bearer tokens.
    pub token_verifier: Arc<TokenVerifier>,

    // ── Repositories ─────────────────────────────────────────────
    /// Push subscription repository, used by the subscription endpoints.
    pub push_repo: Arc<PushSubscriptionRepository>,

    // ── Services ─────────────────────────────────────────────────
    /// Adoption request lifecycle service.
    pub adoption_service: Arc<AdoptionService>,
    /// Puppy catalog service.
    pub puppy_service: Arc<PuppyService>,
    /// In-app notification service.
    pub notification_service: Arc<NotificationService>,
    /// User profile service.
    pub user_service: Arc<UserService>,
    /// Support chat service.
    pub chat_service: Arc<ChatService>,
    /// Transactional email dispatcher, used by the contact endpoint.
    pub email: Arc<EmailDispatcher>,
}
