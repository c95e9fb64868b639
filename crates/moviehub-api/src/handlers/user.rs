//! User profile handlers.
//!
//! Profile reads are public. Mutations require a session whose user id
//! matches the path id; a logged-in user can only touch their own account.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use moviehub_core::error::AppError;

use crate::dto::response::{UserMessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{BaseUrl, Json, Path, SessionUser};
use crate::forms;
use crate::handlers::auth::remove_session_cookie;
use crate::state::AppState;

/// Rejects mutations on accounts other than the caller's own.
fn ensure_self(session: SessionUser, path_id: i64) -> Result<(), AppError> {
    if session.user_id != path_id {
        return Err(AppError::authorization(
            "You are not authorized to modify this profile.",
        ));
    }
    Ok(())
}

/// GET /api/user/:id
pub async fn get_profile(
    State(state): State<AppState>,
    base_url: BaseUrl,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get(id).await?;
    Ok(Json(UserResponse::from_model(user, base_url.0.as_deref())))
}

/// POST /api/user/:id
pub async fn update_profile(
    State(state): State<AppState>,
    base_url: BaseUrl,
    session: SessionUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<UserMessageResponse>, ApiError> {
    ensure_self(session, id)?;

    let form = forms::parse_profile_update(multipart).await?;
    let user = state.user_service.update_profile(id, form).await?;

    Ok(Json(UserMessageResponse {
        message: "Profile updated successfully!".to_string(),
        user: UserResponse::from_model(user, base_url.0.as_deref()),
    }))
}

/// DELETE /api/user/:id
///
/// Destroys every session for the account, deletes it, and clears the
/// cookie. The cascading foreign key catches sessions created in between.
pub async fn delete_account(
    State(state): State<AppState>,
    session: SessionUser,
    Path(id): Path<i64>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar), ApiError> {
    ensure_self(session, id)?;

    state.session_manager.destroy_all_for_user(id).await?;
    state.user_service.delete_account(id).await?;
    let jar = remove_session_cookie(&state, jar);

    Ok((StatusCode::NO_CONTENT, jar))
}
