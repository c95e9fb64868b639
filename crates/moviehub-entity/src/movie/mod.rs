//! Movie entity.

pub mod model;

pub use model::{CreateMovie, Movie, MovieChanges};
