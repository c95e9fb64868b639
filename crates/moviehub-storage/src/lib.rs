//! # moviehub-storage
//!
//! Filesystem storage for uploaded files. Each upload category gets its own
//! subdirectory under the static root; files are stored under randomized
//! unique names and referenced from database rows by relative path.

pub mod uploads;

pub use uploads::{UploadKind, UploadStore};
