//! User repository implementation.

use sqlx::PgPool;

use moviehub_core::error::{AppError, ErrorKind};
use moviehub_core::result::AppResult;
use moviehub_entity::user::{CreateUser, User, UserChanges};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

/// Map a sqlx error to a conflict when a uniqueness constraint fired.
fn map_unique_violation(e: sqlx::Error, context: &'static str) -> AppError {
    match &e {
        sqlx::Error::Database(db_err)
            if matches!(
                db_err.constraint(),
                Some("users_username_key") | Some("users_email_key")
            ) =>
        {
            AppError::conflict("Username or email already exists.")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, bio, profile_photo) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.bio)
        .bind(&data.profile_photo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to create user"))
    }

    /// Apply partial changes to an existing user profile.
    ///
    /// `None` fields are left unchanged via COALESCE.
    pub async fn update(&self, id: i64, changes: &UserChanges) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = COALESCE($2, username), \
                              email = COALESCE($3, email), \
                              bio = COALESCE($4, bio), \
                              profile_photo = COALESCE($5, profile_photo) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.username)
        .bind(&changes.email)
        .bind(&changes.bio)
        .bind(&changes.profile_photo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Failed to update user"))?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Delete a user by ID. Returns whether a row was removed.
    ///
    /// Associated sessions are removed by the `ON DELETE CASCADE` foreign key.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}
