//! Concrete repository implementations over the sqlx pool.

pub mod movie;
pub mod session;
pub mod user;

pub use movie::MovieRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
