//! Session lifecycle manager: establish, validate, and destroy sessions.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use moviehub_core::error::AppError;
use moviehub_database::repositories::session::SessionRepository;
use moviehub_entity::session::Session;

/// Manages server-side sessions keyed by the opaque cookie token.
///
/// No expiry, rotation, or multi-factor logic lives here; a session is valid
/// exactly as long as its row exists.
#[derive(Debug, Clone)]
pub struct SessionManager {
    /// Session persistence.
    repo: Arc<SessionRepository>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(repo: Arc<SessionRepository>) -> Self {
        Self { repo }
    }

    /// Establishes a new session for the given user and returns it.
    pub async fn establish(&self, user_id: i64) -> Result<Session, AppError> {
        let session = Session::new(user_id);
        self.repo.create(&session).await?;
        info!(user_id, session_id = %session.id, "Session established");
        Ok(session)
    }

    /// Resolves a session token to the authenticated user id, if the
    /// session exists.
    pub async fn resolve(&self, token: Uuid) -> Result<Option<i64>, AppError> {
        Ok(self.repo.find_by_id(token).await?.map(|s| s.user_id))
    }

    /// Destroys a single session. Missing sessions are not an error.
    pub async fn destroy(&self, token: Uuid) -> Result<(), AppError> {
        if self.repo.delete(token).await? {
            info!(session_id = %token, "Session destroyed");
        }
        Ok(())
    }

    /// Destroys every session belonging to a user (account deletion).
    pub async fn destroy_all_for_user(&self, user_id: i64) -> Result<(), AppError> {
        let removed = self.repo.delete_by_user(user_id).await?;
        if removed > 0 {
            info!(user_id, removed, "User sessions destroyed");
        }
        Ok(())
    }
}
