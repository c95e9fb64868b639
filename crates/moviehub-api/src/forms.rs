//! Multipart form parsing.
//!
//! Movies and user profiles arrive as `multipart/form-data` so that file
//! uploads travel with the other fields. Numeric fields are accepted only
//! as digit-only strings; anything else is treated as absent, which means
//! NULL on create and "leave unchanged" on update.

use axum::extract::Multipart;
use axum::extract::multipart::Field;

use moviehub_core::error::AppError;
use moviehub_service::UploadedFile;
use moviehub_service::movie::{MovieUpdate, NewMovie};
use moviehub_service::user::{ProfileUpdate, Signup};

/// Parses a digit-only string into an integer.
///
/// Returns `None` for empty input, any non-digit character (including
/// signs), and values that do not fit in an `i32`.
fn parse_digits(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn invalid_form(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::with_source(
        moviehub_core::error::ErrorKind::Validation,
        "Invalid multipart form data",
        err,
    )
}

/// Reads a file part into an [`UploadedFile`].
///
/// A part with no filename (a plain text part sent under a file field
/// name) yields a detached file that services will ignore.
async fn read_file(field: Field<'_>) -> Result<UploadedFile, AppError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let data = field.bytes().await.map_err(invalid_form)?;
    Ok(UploadedFile { filename, data })
}

async fn read_text(field: Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(invalid_form)
}

/// Parses the movie creation form.
pub async fn parse_new_movie(mut multipart: Multipart) -> Result<NewMovie, AppError> {
    let mut form = NewMovie::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        match field.name().unwrap_or_default().to_string().as_str() {
            "title" => form.title = read_text(field).await?,
            "genre" => form.genre = Some(read_text(field).await?),
            "release_year" => form.release_year = parse_digits(&read_text(field).await?),
            "rating" => form.rating = parse_digits(&read_text(field).await?),
            "poster" => form.poster = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

/// Parses the movie update form. Absent fields stay `None` and leave the
/// stored values unchanged.
pub async fn parse_movie_update(mut multipart: Multipart) -> Result<MovieUpdate, AppError> {
    let mut form = MovieUpdate::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        match field.name().unwrap_or_default().to_string().as_str() {
            "title" => form.title = Some(read_text(field).await?),
            "genre" => form.genre = Some(read_text(field).await?),
            "release_year" => form.release_year = parse_digits(&read_text(field).await?),
            "rating" => form.rating = parse_digits(&read_text(field).await?),
            "poster" => form.poster = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

/// Parses the signup form.
pub async fn parse_signup(mut multipart: Multipart) -> Result<Signup, AppError> {
    let mut form = Signup::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        match field.name().unwrap_or_default().to_string().as_str() {
            "username" => form.username = read_text(field).await?,
            "email" => form.email = read_text(field).await?,
            "password" => form.password = read_text(field).await?,
            "confirm_password" => form.confirm_password = read_text(field).await?,
            "bio" => form.bio = Some(read_text(field).await?),
            "photo" => form.photo = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(form)
}

/// Parses the profile update form.
pub async fn parse_profile_update(mut multipart: Multipart) -> Result<ProfileUpdate, AppError> {
    let mut form = ProfileUpdate::default();

    while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
        match field.name().unwrap_or_default().to_string().as_str() {
            "username" => form.username = Some(read_text(field).await?),
            "email" => form.email = Some(read_text(field).await?),
            "bio" => form.bio = Some(read_text(field).await?),
            "photo" => form.photo = Some(read_file(field).await?),
            _ => {}
        }
    }

    Ok(form)
}
