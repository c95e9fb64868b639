//! Session extractors: pull the session cookie, resolve it against the
//! session store, and inject the authenticated user id.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use uuid::Uuid;

use moviehub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated user, required. Rejects with 401 when there is no
/// valid session cookie.
#[derive(Debug, Clone, Copy)]
pub struct SessionUser {
    /// The authenticated user's id.
    pub user_id: i64,
}

/// An authenticated user, optional. Resolves to `None` instead of
/// rejecting when there is no valid session.
#[derive(Debug, Clone, Copy)]
pub struct MaybeSessionUser(pub Option<i64>);

/// Reads the session cookie and resolves it to a user id, if possible.
///
/// A missing cookie, a malformed token, and a token with no matching
/// session row all resolve to `None`. Only infrastructure failures error.
async fn resolve_session(parts: &Parts, state: &AppState) -> Result<Option<i64>, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);

    let token = match jar
        .get(&state.config.session.cookie_name)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
    {
        Some(token) => token,
        None => return Ok(None),
    };

    state.session_manager.resolve(token).await
}

#[async_trait]
impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_session(parts, state).await? {
            Some(user_id) => Ok(Self { user_id }),
            None => Err(ApiError(AppError::authentication(
                "Authentication required. Please log in.",
            ))),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeSessionUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self(resolve_session(parts, state).await?))
    }
}
