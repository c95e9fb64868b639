//! Route definitions for the MovieHub HTTP API.
//!
//! API routes are mounted under `/api`; uploaded files are served from
//! `/static` straight off the filesystem. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;
    let static_root = state.config.storage.static_root.clone();

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(movie_routes())
        .merge(user_routes())
        .merge(health_routes());

    let cors = middleware::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new(static_root))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Signup, login, logout, and the session probe.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .route("/logout", post(handlers::auth::logout))
        .route("/check_auth", get(handlers::auth::check_auth))
}

/// Movie catalog CRUD. Updates use POST so multipart uploads work from
/// plain HTML forms.
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(handlers::movie::list_movies).post(handlers::movie::create_movie),
        )
        .route(
            "/movies/:id",
            get(handlers::movie::get_movie)
                .post(handlers::movie::update_movie)
                .delete(handlers::movie::delete_movie),
        )
}

/// User profile endpoints.
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/user/:id",
        get(handlers::user::get_profile)
            .post(handlers::user::update_profile)
            .delete(handlers::user::delete_account),
    )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
