//! # moviehub-auth
//!
//! Authentication building blocks for MovieHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `session`: server-side session lifecycle (create, validate, destroy)

pub mod password;
pub mod session;

pub use password::PasswordHasher;
pub use session::SessionManager;
