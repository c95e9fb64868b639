//! Wrappers over Axum's built-in `Path` and `Json` extractors.
//!
//! The built-in extractors reject with plain-text bodies. These wrappers
//! convert the rejection into `ApiError`, so a malformed id or request
//! body produces the same structured error body as every other failure.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use moviehub_core::error::AppError;

use crate::error::ApiError;

/// `axum::extract::Path` with the structured error contract on rejection.
#[derive(Debug, Clone, Copy, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

/// `axum::Json` with the structured error contract on rejection.
///
/// Also usable in responses; serialization delegates to `axum::Json`.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError(AppError::validation(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::validation(rejection.body_text()))
    }
}
