//! User accounts: signup, credential checks, profile edits, deletion.

use std::sync::Arc;

use tracing::info;

use moviehub_auth::PasswordHasher;
use moviehub_core::error::AppError;
use moviehub_database::repositories::user::UserRepository;
use moviehub_entity::user::{CreateUser, User, UserChanges};
use moviehub_storage::{UploadKind, UploadStore};

use crate::upload::UploadedFile;

/// Input for creating an account.
#[derive(Debug, Clone, Default)]
pub struct Signup {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Biography (optional).
    pub bio: Option<String>,
    /// Profile photo, if one was attached.
    pub photo: Option<UploadedFile>,
}

/// Input for a partial profile update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    /// Replacement profile photo, if one was attached.
    pub photo: Option<UploadedFile>,
}

/// Handles user account operations.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    uploads: Arc<UploadStore>,
    hasher: PasswordHasher,
}

/// Reject signups missing a required field or with mismatched passwords.
fn validate_signup(input: &Signup) -> Result<(), AppError> {
    if input.username.is_empty()
        || input.email.is_empty()
        || input.password.is_empty()
        || input.confirm_password.is_empty()
    {
        return Err(AppError::validation(
            "Username, email, password, and confirm password are required.",
        ));
    }
    if input.password != input.confirm_password {
        return Err(AppError::validation("Passwords do not match."));
    }
    Ok(())
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>, uploads: Arc<UploadStore>, hasher: PasswordHasher) -> Self {
        Self {
            users,
            uploads,
            hasher,
        }
    }

    /// Registers a new account. Duplicate usernames or emails surface as a
    /// conflict from the repository layer.
    pub async fn signup(&self, input: Signup) -> Result<User, AppError> {
        validate_signup(&input)?;

        let profile_photo = match &input.photo {
            Some(file) if file.is_attached() => {
                self.uploads
                    .save(UploadKind::ProfilePhoto, &file.filename, file.data.clone())
                    .await?
            }
            _ => None,
        };

        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .users
            .create(&CreateUser {
                username: input.username,
                email: input.email,
                password_hash,
                bio: input.bio,
                profile_photo,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Checks a credential pair. Both an unknown email and a wrong password
    /// yield the same authentication error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, AppError> {
        let invalid = || AppError::authentication("Invalid email or password.");

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        info!(user_id = user.id, "User authenticated");
        Ok(user)
    }

    /// Fetches one user by id.
    pub async fn get(&self, id: i64) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Applies a partial profile update. A replacement photo deletes the old
    /// file before the new one is stored.
    pub async fn update_profile(&self, id: i64, input: ProfileUpdate) -> Result<User, AppError> {
        let existing = self.get(id).await?;

        let profile_photo = match &input.photo {
            Some(file) if file.is_attached() => {
                if let Some(old) = &existing.profile_photo {
                    self.uploads.delete(old).await;
                }
                self.uploads
                    .save(UploadKind::ProfilePhoto, &file.filename, file.data.clone())
                    .await?
            }
            _ => None,
        };

        let user = self
            .users
            .update(
                id,
                &UserChanges {
                    username: input.username,
                    email: input.email,
                    bio: input.bio,
                    profile_photo,
                },
            )
            .await?;

        info!(user_id = user.id, "Profile updated");
        Ok(user)
    }

    /// Deletes an account and its profile photo, if any. The caller is
    /// responsible for tearing down the account's sessions.
    pub async fn delete_account(&self, id: i64) -> Result<(), AppError> {
        let user = self.get(id).await?;

        if let Some(photo) = &user.profile_photo {
            self.uploads.delete(photo).await;
        }

        self.users.delete(id).await?;
        info!(user_id = id, "Account deleted");
        Ok(())
    }
}
