//! Movie catalog CRUD with poster lifecycle.

use std::sync::Arc;

use tracing::info;

use moviehub_core::error::AppError;
use moviehub_database::repositories::movie::MovieRepository;
use moviehub_entity::movie::{CreateMovie, Movie, MovieChanges};
use moviehub_storage::{UploadKind, UploadStore};

use crate::upload::UploadedFile;

/// Input for creating a movie.
#[derive(Debug, Clone, Default)]
pub struct NewMovie {
    /// Title (required, non-empty).
    pub title: String,
    /// Genre (optional).
    pub genre: Option<String>,
    /// Release year (optional).
    pub release_year: Option<i32>,
    /// Rating (optional, 1..=10).
    pub rating: Option<i32>,
    /// Poster file, if one was attached.
    pub poster: Option<UploadedFile>,
}

/// Input for a partial movie update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    /// New title.
    pub title: Option<String>,
    /// New genre.
    pub genre: Option<String>,
    /// New release year.
    pub release_year: Option<i32>,
    /// New rating.
    pub rating: Option<i32>,
    /// Replacement poster file, if one was attached.
    pub poster: Option<UploadedFile>,
}

/// Handles movie catalog operations.
#[derive(Debug, Clone)]
pub struct MovieService {
    /// Movie repository.
    movies: Arc<MovieRepository>,
    /// Poster file storage.
    uploads: Arc<UploadStore>,
}

/// Reject ratings outside 1..=10.
fn validate_rating(rating: Option<i32>) -> Result<(), AppError> {
    match rating {
        Some(r) if !Movie::rating_in_range(r) => {
            Err(AppError::validation("Rating must be between 1 and 10"))
        }
        _ => Ok(()),
    }
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(movies: Arc<MovieRepository>, uploads: Arc<UploadStore>) -> Self {
        Self { movies, uploads }
    }

    /// Creates a movie, storing its poster first if one was attached.
    ///
    /// A database failure after the poster write leaves an orphaned file;
    /// this is accepted.
    pub async fn create(&self, input: NewMovie) -> Result<Movie, AppError> {
        if input.title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        validate_rating(input.rating)?;

        let poster_path = match &input.poster {
            Some(file) if file.is_attached() => {
                self.uploads
                    .save(UploadKind::MoviePoster, &file.filename, file.data.clone())
                    .await?
            }
            _ => None,
        };

        let movie = self
            .movies
            .create(&CreateMovie {
                title: input.title,
                genre: input.genre,
                release_year: input.release_year,
                rating: input.rating,
                poster_path,
            })
            .await?;

        info!(movie_id = movie.id, title = %movie.title, "Movie created");
        Ok(movie)
    }

    /// Lists all movies ordered by title.
    pub async fn list(&self) -> Result<Vec<Movie>, AppError> {
        self.movies.list_by_title().await
    }

    /// Fetches one movie by id.
    pub async fn get(&self, id: i64) -> Result<Movie, AppError> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    /// Applies a partial update. A replacement poster deletes the old file
    /// before the new one is stored.
    pub async fn update(&self, id: i64, input: MovieUpdate) -> Result<Movie, AppError> {
        let existing = self.get(id).await?;
        validate_rating(input.rating)?;

        let poster_path = match &input.poster {
            Some(file) if file.is_attached() => {
                if let Some(old) = &existing.poster_path {
                    self.uploads.delete(old).await;
                }
                self.uploads
                    .save(UploadKind::MoviePoster, &file.filename, file.data.clone())
                    .await?
            }
            _ => None,
        };

        let movie = self
            .movies
            .update(
                id,
                &MovieChanges {
                    title: input.title,
                    genre: input.genre,
                    release_year: input.release_year,
                    rating: input.rating,
                    poster_path,
                },
            )
            .await?;

        info!(movie_id = movie.id, "Movie updated");
        Ok(movie)
    }

    /// Deletes a movie and its poster file, if any.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let movie = self.get(id).await?;

        if let Some(poster) = &movie.poster_path {
            self.uploads.delete(poster).await;
        }

        self.movies.delete(id).await?;
        info!(movie_id = id, "Movie deleted");
        Ok(())
    }
}
