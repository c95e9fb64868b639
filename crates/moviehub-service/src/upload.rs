//! Uploaded-file value type passed from the HTTP layer into services.

use bytes::Bytes;

/// An uploaded file extracted from a multipart form.
///
/// A part with an empty filename counts as "no file attached"; callers use
/// [`UploadedFile::is_attached`] to decide whether to touch storage at all.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original client-side filename (may be empty).
    pub filename: String,
    /// Full file content.
    pub data: Bytes,
}

impl UploadedFile {
    /// Whether this part actually carries a file.
    pub fn is_attached(&self) -> bool {
        !self.filename.is_empty()
    }
}
