//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use sanctuary_auth::Claims;
use sanctuary_core::config::AppConfig;
use sanctuary_core::events::EventBus;
use sanctuary_entity::puppy::PuppyStatus;
use sanctuary_entity::user::UserRole;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db = sanctuary_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        sanctuary_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let db_pool = db.pool().clone();
        Self::clean_database(&db_pool).await;

        let event_bus = EventBus::new();
        let token_verifier = Arc::new(sanctuary_auth::TokenVerifier::new(&config.auth));

        let adoption_repo = Arc::new(
            sanctuary_database::repositories::adoption::AdoptionRepository::new(db_pool.clone()),
        );
        let puppy_repo = Arc::new(
            sanctuary_database::repositories::puppy::PuppyRepository::new(db_pool.clone()),
        );
        let user_repo = Arc::new(sanctuary_database::repositories::user::UserRepository::new(
            db_pool.clone(),
        ));
        let notification_repo = Arc::new(
            sanctuary_database::repositories::notification::NotificationRepository::new(
                db_pool.clone(),
            ),
        );
        let conversation_repo = Arc::new(
            sanctuary_database::repositories::conversation::ConversationRepository::new(
                db_pool.clone(),
            ),
        );
        let message_repo = Arc::new(
            sanctuary_database::repositories::message::MessageRepository::new(db_pool.clone()),
        );
        let push_repo = Arc::new(
            sanctuary_database::repositories::push_subscription::PushSubscriptionRepository::new(
                db_pool.clone(),
            ),
        );

        let email = Arc::new(sanctuary_service::EmailDispatcher::new(
            config.notify.email.clone(),
        ));
        let push = Arc::new(sanctuary_service::PushDispatcher::new(
            config.notify.push.clone(),
            Arc::clone(&push_repo),
        ));

        let notification_service = Arc::new(sanctuary_service::NotificationService::new(
            Arc::clone(&notification_repo),
        ));
        let adoption_service = Arc::new(sanctuary_service::AdoptionService::new(
            Arc::clone(&adoption_repo),
            Arc::clone(&puppy_repo),
            Arc::clone(&user_repo),
            Arc::clone(&notification_service),
            Arc::clone(&email),
            Arc::clone(&push),
            event_bus.clone(),
        ));
        let puppy_service = Arc::new(sanctuary_service::PuppyService::new(
            Arc::clone(&puppy_repo),
            event_bus.clone(),
        ));
        let user_service = Arc::new(sanctuary_service::UserService::new(Arc::clone(&user_repo)));
        let chat_service = Arc::new(sanctuary_service::ChatService::new(
            Arc::clone(&conversation_repo),
            Arc::clone(&message_repo),
            event_bus.clone(),
        ));

        let app_state = sanctuary_api::state::AppState {
            config: Arc::new(config.clone()),
            db,
            event_bus,
            token_verifier,
            push_repo,
            adoption_service,
            puppy_service,
            notification_service,
            user_service,
            chat_service,
            email,
        };

        let router = sanctuary_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "push_subscriptions",
            "chat_messages",
            "conversations",
            "notifications",
            "adoption_requests",
            "puppies",
            "users",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, email: &str, role: UserRole) -> Uuid {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO users (id, email, display_name, role, created_at, updated_at)
               VALUES ($1, $2, $3, $4, NOW(), NOW())"#,
        )
        .bind(id)
        .bind(email)
        .bind(email.split('@').next())
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Create a test puppy and return its ID
    pub async fn create_test_puppy(&self, name: &str, status: PuppyStatus, deposit: i64) -> Uuid {
        let id: (Uuid,) = sqlx::query_as(
            r#"INSERT INTO puppies
                   (name, age, gender, adoption_fee, deposit_amount, description, status)
               VALUES ($1, '12 weeks', 'female', $2, $3, 'A very good dog', $4)
               RETURNING id"#,
        )
        .bind(name)
        .bind(deposit * 4)
        .bind(deposit)
        .bind(status)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to create test puppy");

        id.0
    }

    /// Mint a bearer token for a user, signed with the test secret
    pub fn token_for(&self, user_id: Uuid, email: &str, role: UserRole) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            name: Some(email.split('@').next().unwrap_or("test").to_string()),
            role,
            iat: now,
            exp: now + 3600,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.auth.jwt_secret.as_bytes()),
        )
        .expect("Failed to mint test token")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// A fully filled-in adoption questionnaire
pub fn complete_application() -> Value {
    serde_json::json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane@example.com",
        "phone": "555-0100",
        "contact_method": "email",
        "address": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zip": "62704",
        "residence_type": "house",
        "rent_or_own": "own",
        "household_members": "Jane, partner, two kids",
        "yard_description": "Fenced backyard",
        "occupation": "Librarian",
        "daytime_care": "Works from home",
        "pet_experience": "Grew up with dogs",
        "adoption_reason": "Family companion",
        "agree_to_spay_neuter": true,
        "training_commitment": true,
        "consent_home_visit": true,
        "agreed_to_terms": true,
        "signature": "Jane Doe",
    })
}
