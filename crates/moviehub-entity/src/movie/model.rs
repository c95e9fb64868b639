//! Movie entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Valid inclusive rating bounds.
pub const RATING_MIN: i32 = 1;
/// Valid inclusive rating bounds.
pub const RATING_MAX: i32 = 10;

/// A movie in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: i64,
    /// Title (unique across the catalog).
    pub title: String,
    /// Genre (optional).
    pub genre: Option<String>,
    /// Release year (optional).
    pub release_year: Option<i32>,
    /// Rating in 1..=10 (optional).
    pub rating: Option<i32>,
    /// Relative poster file path under the static root (optional).
    pub poster_path: Option<String>,
}

impl Movie {
    /// Whether a rating value is within the accepted 1..=10 range.
    pub fn rating_in_range(rating: i32) -> bool {
        (RATING_MIN..=RATING_MAX).contains(&rating)
    }
}

/// Data required to create a new movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovie {
    /// Title (required, non-empty).
    pub title: String,
    /// Genre (optional).
    pub genre: Option<String>,
    /// Release year (optional).
    pub release_year: Option<i32>,
    /// Rating (optional, 1..=10).
    pub rating: Option<i32>,
    /// Relative poster path, already written to storage (optional).
    pub poster_path: Option<String>,
}

/// Field-by-field changes for an existing movie.
///
/// `None` means "leave unchanged"; this mirrors the partial-overwrite
/// semantics of the multipart update form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieChanges {
    /// New title.
    pub title: Option<String>,
    /// New genre.
    pub genre: Option<String>,
    /// New release year.
    pub release_year: Option<i32>,
    /// New rating.
    pub rating: Option<i32>,
    /// New poster path (set only after the replacement file is stored).
    pub poster_path: Option<String>,
}
