//! User account operations.

pub mod service;

pub use service::{ProfileUpdate, Signup, UserService};
