//! Movie CRUD handlers.
//!
//! Reads are public; every mutation requires a session but movies have no
//! per-user ownership.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use crate::dto::response::{MovieMessageResponse, MovieResponse};
use crate::error::ApiError;
use crate::extractors::{BaseUrl, Json, Path, SessionUser};
use crate::forms;
use crate::state::AppState;

/// POST /api/movies
pub async fn create_movie(
    State(state): State<AppState>,
    base_url: BaseUrl,
    _session: SessionUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MovieMessageResponse>), ApiError> {
    let form = forms::parse_new_movie(multipart).await?;
    let movie = state.movie_service.create(form).await?;

    Ok((
        StatusCode::CREATED,
        Json(MovieMessageResponse {
            message: "Movie created successfully!".to_string(),
            movie: MovieResponse::from_model(movie, base_url.0.as_deref()),
        }),
    ))
}

/// GET /api/movies
pub async fn list_movies(
    State(state): State<AppState>,
    base_url: BaseUrl,
) -> Result<Json<Vec<MovieResponse>>, ApiError> {
    let movies = state.movie_service.list().await?;
    let base = base_url.0.as_deref();

    Ok(Json(
        movies
            .into_iter()
            .map(|m| MovieResponse::from_model(m, base))
            .collect(),
    ))
}

/// GET /api/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    base_url: BaseUrl,
    Path(id): Path<i64>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = state.movie_service.get(id).await?;
    Ok(Json(MovieResponse::from_model(movie, base_url.0.as_deref())))
}

/// POST /api/movies/:id
pub async fn update_movie(
    State(state): State<AppState>,
    base_url: BaseUrl,
    _session: SessionUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<MovieMessageResponse>, ApiError> {
    let form = forms::parse_movie_update(multipart).await?;
    let movie = state.movie_service.update(id, form).await?;

    Ok(Json(MovieMessageResponse {
        message: "Movie updated successfully!".to_string(),
        movie: MovieResponse::from_model(movie, base_url.0.as_deref()),
    }))
}

/// DELETE /api/movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    _session: SessionUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.movie_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
