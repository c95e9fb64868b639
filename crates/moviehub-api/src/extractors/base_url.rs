//! Request base URL, reconstructed from headers.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

use crate::state::AppState;

/// The externally-visible base URL of this request, e.g.
/// `http://localhost:6543`. `None` when the request carries no `Host`
/// header; serialized file URLs are then omitted.
#[derive(Debug, Clone)]
pub struct BaseUrl(pub Option<String>);

/// Builds a base URL from the `Host` header, taking the scheme from
/// `x-forwarded-proto` when a proxy supplies one.
pub fn base_url_from_headers(headers: &HeaderMap) -> Option<String> {
    let host = headers.get("host").and_then(|v| v.to_str().ok())?;

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    Some(format!("{scheme}://{host}"))
}

#[async_trait]
impl FromRequestParts<AppState> for BaseUrl {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(base_url_from_headers(&parts.headers)))
    }
}
