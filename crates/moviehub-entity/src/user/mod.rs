//! User entity.

pub mod model;

pub use model::{CreateUser, User, UserChanges};
