//! Session cookie configuration.

use serde::{Deserialize, Serialize};

/// Server-side session configuration.
///
/// Sessions have no application-level expiry; their lifetime is bounded only
/// by explicit logout or account deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether to set the `Secure` attribute on the cookie.
    #[serde(default)]
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            cookie_secure: false,
        }
    }
}

fn default_cookie_name() -> String {
    "moviehub_session".to_string()
}
