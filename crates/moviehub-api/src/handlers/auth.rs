//! Auth handlers: signup, login, logout, check_auth.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;
use validator::Validate;

use moviehub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{AuthStatusResponse, MessageResponse, UserMessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{BaseUrl, Json, MaybeSessionUser};
use crate::forms;
use crate::state::AppState;

/// Builds the session cookie carrying the given token.
fn session_cookie(state: &AppState, token: Uuid) -> Cookie<'static> {
    Cookie::build((state.config.session.cookie_name.clone(), token.to_string()))
        .path("/")
        .http_only(true)
        .secure(state.config.session.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}

/// Removes the session cookie from the jar.
pub fn remove_session_cookie(state: &AppState, jar: CookieJar) -> CookieJar {
    jar.remove(
        Cookie::build(state.config.session.cookie_name.clone())
            .path("/")
            .build(),
    )
}

/// POST /api/signup
///
/// Creates the account and immediately establishes a session, so a fresh
/// signup is also logged in.
pub async fn signup(
    State(state): State<AppState>,
    base_url: BaseUrl,
    jar: CookieJar,
    multipart: Multipart,
) -> Result<(StatusCode, CookieJar, Json<UserMessageResponse>), ApiError> {
    let form = forms::parse_signup(multipart).await?;
    let user = state.user_service.signup(form).await?;

    let session = state.session_manager.establish(user.id).await?;
    let jar = jar.add(session_cookie(&state, session.id));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(UserMessageResponse {
            message: "User created successfully!".to_string(),
            user: UserResponse::from_model(user, base_url.0.as_deref()),
        }),
    ))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    base_url: BaseUrl,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<UserMessageResponse>), ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email and password are required."))?;

    let user = state
        .user_service
        .authenticate(&req.email, &req.password)
        .await?;

    let session = state.session_manager.establish(user.id).await?;
    let jar = jar.add(session_cookie(&state, session.id));

    Ok((
        jar,
        Json(UserMessageResponse {
            message: "Login successful!".to_string(),
            user: UserResponse::from_model(user, base_url.0.as_deref()),
        }),
    ))
}

/// POST /api/logout
///
/// Destroys the session row if the cookie resolves to one, then clears the
/// cookie. Logging out without a session is not an error.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    if let Some(token) = jar
        .get(&state.config.session.cookie_name)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
    {
        state.session_manager.destroy(token).await?;
    }

    let jar = remove_session_cookie(&state, jar);

    Ok((jar, Json(MessageResponse::new("Logout successful!"))))
}

/// GET /api/check_auth
///
/// Always answers 200. A missing cookie, a dead session, or a session whose
/// user row has since been deleted all read as "not authenticated".
pub async fn check_auth(
    State(state): State<AppState>,
    base_url: BaseUrl,
    MaybeSessionUser(user_id): MaybeSessionUser,
) -> Result<Json<AuthStatusResponse>, ApiError> {
    let user = match user_id {
        Some(id) => state.user_repo.find_by_id(id).await?,
        None => None,
    };

    Ok(Json(AuthStatusResponse {
        is_authenticated: user.is_some(),
        user: user.map(|u| UserResponse::from_model(u, base_url.0.as_deref())),
    }))
}
