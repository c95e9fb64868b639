//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use moviehub_auth::SessionManager;
use moviehub_core::config::AppConfig;
use moviehub_database::connection::DatabasePool;
use moviehub_database::repositories::user::UserRepository;
use moviehub_service::{MovieService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (used by the health check)
    pub db: DatabasePool,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,
    /// User repository (used directly by `check_auth`)
    pub user_repo: Arc<UserRepository>,
    /// Movie catalog service
    pub movie_service: Arc<MovieService>,
    /// User account service
    pub user_service: Arc<UserService>,
}
