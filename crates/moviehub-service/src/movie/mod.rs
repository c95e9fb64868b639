//! Movie catalog operations.

pub mod service;

pub use service::{MovieService, MovieUpdate, NewMovie};
