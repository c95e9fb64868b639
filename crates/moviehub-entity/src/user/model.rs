//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered user.
///
/// The password hash is never serialized; API responses additionally go
/// through dedicated DTOs that do not carry it at all.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Free-form biography (optional).
    pub bio: Option<String>,
    /// Relative profile photo path under the static root (optional).
    pub profile_photo: Option<String>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Biography (optional).
    pub bio: Option<String>,
    /// Relative profile photo path, already written to storage (optional).
    pub profile_photo: Option<String>,
}

/// Field-by-field changes for an existing user profile.
///
/// `None` means "leave unchanged".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserChanges {
    /// New username.
    pub username: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New profile photo path (set only after the replacement file is stored).
    pub profile_photo: Option<String>,
}
