//! # moviehub-entity
//!
//! Domain entity models for MovieHub. Every struct in this crate represents
//! a database table row or a creation/update payload. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod movie;
pub mod session;
pub mod user;

pub use movie::Movie;
pub use session::Session;
pub use user::User;
