//! Server-side session model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A server-side session row.
///
/// The `id` doubles as the opaque token stored in the session cookie.
/// Sessions carry no expiry; they live until logout or account deletion.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Session token, also the primary key.
    pub id: Uuid,
    /// The authenticated user.
    pub user_id: i64,
    /// When the session was established.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session for the given user with a random token.
    pub fn new(user_id: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
