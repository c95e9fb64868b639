//! # moviehub-api
//!
//! HTTP API layer for MovieHub built on Axum.
//!
//! Provides the REST endpoints, session cookie handling, multipart form
//! parsing, middleware (CORS, tracing, compression), DTOs, and the mapping
//! from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
