//! # moviehub-service
//!
//! Domain services for MovieHub. Each service owns one resource's business
//! rules: field validation, the uploaded-file lifecycle, and the single
//! repository mutation per operation.

pub mod movie;
pub mod upload;
pub mod user;

pub use movie::MovieService;
pub use upload::UploadedFile;
pub use user::UserService;
