//! Request extractors.

pub mod base_url;
pub mod rejection;
pub mod session;

pub use base_url::BaseUrl;
pub use rejection::{Json, Path};
pub use session::{MaybeSessionUser, SessionUser};
