//! Movie repository implementation.

use sqlx::PgPool;

use moviehub_core::error::{AppError, ErrorKind};
use moviehub_core::result::AppResult;
use moviehub_entity::movie::{CreateMovie, Movie, MovieChanges};

/// Repository for movie CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a movie by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find movie by id", e)
            })
    }

    /// List all movies ordered by title.
    pub async fn list_by_title(&self) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY title ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))
    }

    /// Create a new movie.
    pub async fn create(&self, data: &CreateMovie) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, genre, release_year, rating, poster_path) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.genre)
        .bind(data.release_year)
        .bind(data.rating)
        .bind(&data.poster_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.constraint() == Some("movies_title_key") => {
                AppError::conflict(format!("Movie '{}' already exists", data.title))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create movie", e),
        })
    }

    /// Apply partial changes to an existing movie.
    ///
    /// `None` fields are left unchanged via COALESCE.
    pub async fn update(&self, id: i64, changes: &MovieChanges) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(
            "UPDATE movies SET title = COALESCE($2, title), \
                               genre = COALESCE($3, genre), \
                               release_year = COALESCE($4, release_year), \
                               rating = COALESCE($5, rating), \
                               poster_path = COALESCE($6, poster_path) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.genre)
        .bind(changes.release_year)
        .bind(changes.rating)
        .bind(&changes.poster_path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.constraint() == Some("movies_title_key") => {
                AppError::conflict("Movie title already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update movie", e),
        })?
        .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    /// Delete a movie by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))?;

        Ok(result.rows_affected() > 0)
    }
}
