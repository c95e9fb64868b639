//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address used as the login identifier.
    #[validate(length(min = 1, message = "Email and password are required."))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Email and password are required."))]
    pub password: String,
}
