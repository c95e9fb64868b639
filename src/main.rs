//! MovieHub server entry point.
//!
//! Wires all crates together: configuration, logging, database pool and
//! migrations, upload storage, sessions, services, and the Axum router.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use moviehub_api::state::AppState;
use moviehub_auth::{PasswordHasher, SessionManager};
use moviehub_core::config::AppConfig;
use moviehub_core::error::AppError;
use moviehub_database::connection::DatabasePool;
use moviehub_database::repositories::movie::MovieRepository;
use moviehub_database::repositories::session::SessionRepository;
use moviehub_database::repositories::user::UserRepository;
use moviehub_service::{MovieService, UserService};
use moviehub_storage::UploadStore;

#[tokio::main]
async fn main() {
    let env = std::env::var("MOVIEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
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
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting MovieHub v{}", env!("CARGO_PKG_VERSION"));

    // Database connection + migrations
    let db = DatabasePool::connect(&config.database).await?;
    moviehub_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // Upload storage (creates the static subdirectories)
    let uploads = Arc::new(UploadStore::new(&config.storage.static_root).await?);

    // Repositories
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let movie_repo = Arc::new(MovieRepository::new(db.pool().clone()));
    let session_repo = Arc::new(SessionRepository::new(db.pool().clone()));

    // Auth + services
    let hasher = PasswordHasher::new();
    let session_manager = Arc::new(SessionManager::new(Arc::clone(&session_repo)));
    let movie_service = Arc::new(MovieService::new(
        Arc::clone(&movie_repo),
        Arc::clone(&uploads),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&uploads),
        hasher,
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        session_manager,
        user_repo,
        movie_service,
        user_service,
    };

    let app = moviehub_api::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("MovieHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("MovieHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            tracing::error!("Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => {
                tracing::error!("Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
