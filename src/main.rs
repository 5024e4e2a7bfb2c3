//! Sanctuary Server — Dog Adoption Platform Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing;
use tracing_subscriber::{EnvFilter, fmt};

use sanctuary_core::config::AppConfig;
use sanctuary_core::error::AppError;
use sanctuary_core::events::EventBus;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SANCTUARY_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Ellie's Sanctuary v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = sanctuary_database::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    sanctuary_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Domain event bus ─────────────────────────────────
    let event_bus = EventBus::new();
    spawn_event_logger(&event_bus);

    // ── Step 3: Token verifier ───────────────────────────────────
    let token_verifier = Arc::new(sanctuary_auth::TokenVerifier::new(&config.auth));

    // ── Step 4: Repositories ─────────────────────────────────────
    let pool = db.pool().clone();
    let adoption_repo = Arc::new(
        sanctuary_database::repositories::adoption::AdoptionRepository::new(pool.clone()),
    );
    let puppy_repo = Arc::new(sanctuary_database::repositories::puppy::PuppyRepository::new(
        pool.clone(),
    ));
    let user_repo = Arc::new(sanctuary_database::repositories::user::UserRepository::new(
        pool.clone(),
    ));
    let notification_repo = Arc::new(
        sanctuary_database::repositories::notification::NotificationRepository::new(pool.clone()),
    );
    let conversation_repo = Arc::new(
        sanctuary_database::repositories::conversation::ConversationRepository::new(pool.clone()),
    );
    let message_repo = Arc::new(
        sanctuary_database::repositories::message::MessageRepository::new(pool.clone()),
    );
    let push_repo = Arc::new(
        sanctuary_database::repositories::push_subscription::PushSubscriptionRepository::new(
            pool.clone(),
        ),
    );

    // ── Step 5: Outbound dispatchers ─────────────────────────────
    let email = Arc::new(sanctuary_service::EmailDispatcher::new(
        config.notify.email.clone(),
    ));
    let push = Arc::new(sanctuary_service::PushDispatcher::new(
        config.notify.push.clone(),
        Arc::clone(&push_repo),
    ));

    // ── Step 6: Services ─────────────────────────────────────────
    tracing::info!("Initializing services...");
    let notification_service = Arc::new(sanctuary_service::NotificationService::new(Arc::clone(
        &notification_repo,
    )));
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
    tracing::info!("Services initialized");

    // ── Step 7: Shutdown channel ─────────────────────────────────
    let (shutdown_tx, _shutdown_rx) = watch::channel(false);

    // ── Step 8: Maintenance scheduler ────────────────────────────
    let scheduler = if config.worker.enabled {
        tracing::info!("Starting maintenance scheduler...");
        let scheduler = sanctuary_worker::MaintenanceScheduler::new(
            config.worker.clone(),
            Arc::clone(&notification_repo),
        )
        .await?;
        scheduler.register_default_tasks().await?;
        scheduler.start().await?;
        tracing::info!("Maintenance scheduler started");
        Some(scheduler)
    } else {
        tracing::info!("Maintenance scheduler disabled");
        None
    };

    // ── Step 9: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let app_state = sanctuary_api::state::AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        event_bus: event_bus.clone(),
        token_verifier: Arc::clone(&token_verifier),
        push_repo: Arc::clone(&push_repo),
        adoption_service: Arc::clone(&adoption_service),
        puppy_service: Arc::clone(&puppy_service),
        notification_service: Arc::clone(&notification_service),
        user_service: Arc::clone(&user_service),
        chat_service: Arc::clone(&chat_service),
        email: Arc::clone(&email),
    };

    let app = sanctuary_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Sanctuary server listening on {}", addr);

    // ── Step 10: Graceful shutdown ───────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 11: Stop background tasks ───────────────────────────
    if let Some(mut scheduler) = scheduler {
        tracing::info!("Stopping maintenance scheduler...");
        if let Err(e) = scheduler.shutdown().await {
            tracing::warn!("Scheduler shutdown error: {}", e);
        }
    }

    db.close().await;

    tracing::info!("Sanctuary server shut down gracefully");
    Ok(())
}

/// Log every domain event at debug level.
///
/// The subscriber task ends on its own once the bus has no more senders.
fn spawn_event_logger(bus: &EventBus) {
    let mut rx = bus.subscribe();
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => tracing::debug!(?event, "domain event"),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!("Event logger lagged, {} events dropped", missed);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
