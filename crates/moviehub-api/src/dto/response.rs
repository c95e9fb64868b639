//! Response DTOs.
//!
//! Serialized movies and users carry both the stored relative file path and
//! a fully-qualified URL built from the request's base URL. The URL is
//! `null` when no base URL could be determined.

use serde::{Deserialize, Serialize};

use moviehub_entity::movie::Movie;
use moviehub_entity::user::User;

/// Builds `<base>/static/<path>` for a stored relative file path.
fn file_url(base_url: Option<&str>, path: Option<&str>) -> Option<String> {
    match (base_url, path) {
        (Some(base), Some(path)) => Some(format!("{base}/static/{path}")),
        _ => None,
    }
}

/// Plain message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A movie as serialized in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    /// Movie ID.
    pub id: i64,
    /// Title.
    pub title: String,
    /// Genre.
    pub genre: Option<String>,
    /// Release year.
    pub release_year: Option<i32>,
    /// Rating (1..=10).
    pub rating: Option<i32>,
    /// Stored relative poster path.
    pub poster_path: Option<String>,
    /// Fully-qualified poster URL.
    pub poster_url: Option<String>,
}

impl MovieResponse {
    /// Converts a movie row, resolving the poster URL against the request
    /// base URL.
    pub fn from_model(movie: Movie, base_url: Option<&str>) -> Self {
        let poster_url = file_url(base_url, movie.poster_path.as_deref());
        Self {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            release_year: movie.release_year,
            rating: movie.rating,
            poster_path: movie.poster_path,
            poster_url,
        }
    }
}

/// A user profile as serialized in API responses. Never carries the
/// password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Biography.
    pub bio: Option<String>,
    /// Stored relative profile photo path.
    pub profile_photo: Option<String>,
    /// Fully-qualified profile photo URL.
    pub profile_url: Option<String>,
}

impl UserResponse {
    /// Converts a user row, resolving the photo URL against the request
    /// base URL.
    pub fn from_model(user: User, base_url: Option<&str>) -> Self {
        let profile_url = file_url(base_url, user.profile_photo.as_deref());
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            profile_photo: user.profile_photo,
            profile_url,
        }
    }
}

/// `{message, movie}` envelope for movie mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieMessageResponse {
    /// Human-readable message.
    pub message: String,
    /// The affected movie.
    pub movie: MovieResponse,
}

/// `{message, user}` envelope for user mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMessageResponse {
    /// Human-readable message.
    pub message: String,
    /// The affected user.
    pub user: UserResponse,
}

/// Authentication status, always returned with 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    /// Whether a valid session is attached to the request.
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    /// The authenticated user, when there is one.
    pub user: Option<UserResponse>,
}
