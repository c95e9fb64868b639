//! Upload store: save and delete poster / profile-photo files.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use moviehub_core::error::{AppError, ErrorKind};
use moviehub_core::result::AppResult;

/// Category of an uploaded file, mapping to a subdirectory of the static root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Movie poster images, stored under `postersMovie/`.
    MoviePoster,
    /// User profile photos, stored under `profile_pics/`.
    ProfilePhoto,
}

impl UploadKind {
    /// Subdirectory name for this category.
    pub fn subdir(&self) -> &'static str {
        match self {
            Self::MoviePoster => "postersMovie",
            Self::ProfilePhoto => "profile_pics",
        }
    }
}

/// Stores uploaded files under a fixed static root.
///
/// Saved files get a random UUID base name with the original extension
/// preserved; collisions are not handled beyond the randomness of the name.
/// There is no transactional linkage between a file write and the database
/// commit that records its path.
#[derive(Debug, Clone)]
pub struct UploadStore {
    /// Root directory for all static files.
    root: PathBuf,
}

impl UploadStore {
    /// Create a new upload store rooted at the given path, creating the
    /// per-category subdirectories if needed.
    pub async fn new(root_path: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root_path.into();
        for kind in [UploadKind::MoviePoster, UploadKind::ProfilePhoto] {
            let dir = root.join(kind.subdir());
            fs::create_dir_all(&dir).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create upload directory: {}", dir.display()),
                    e,
                )
            })?;
        }
        Ok(Self { root })
    }

    /// Root directory for all static files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save an uploaded file and return its store-relative path
    /// (`<subdir>/<uuid><ext>`).
    ///
    /// Returns `Ok(None)` when the original filename is empty, matching the
    /// "no file was actually attached" multipart case.
    pub async fn save(
        &self,
        kind: UploadKind,
        original_filename: &str,
        data: Bytes,
    ) -> AppResult<Option<String>> {
        if original_filename.is_empty() {
            return Ok(None);
        }

        let ext = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();

        let unique_name = format!("{}{}", Uuid::new_v4(), ext);
        let relative = format!("{}/{}", kind.subdir(), unique_name);
        let full_path = self.root.join(kind.subdir()).join(&unique_name);

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write upload: {}", full_path.display()),
                e,
            )
        })?;

        debug!(path = %relative, bytes = data.len(), "Stored upload");
        Ok(Some(relative))
    }

    /// Delete a previously stored file by its relative path.
    ///
    /// Returns `false` when the path is empty, the file does not exist, or
    /// removal fails at the OS level (logged, never raised).
    pub async fn delete(&self, relative_path: &str) -> bool {
        if relative_path.is_empty() {
            return false;
        }

        let full_path = self.root.join(relative_path);
        if !full_path.exists() {
            return false;
        }

        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(path = %relative_path, "Deleted upload");
                true
            }
            Err(e) => {
                warn!(path = %relative_path, error = %e, "Failed to delete upload");
                false
            }
        }
    }

    /// Whether a stored relative path currently resolves to a file.
    pub fn exists(&self, relative_path: &str) -> bool {
        !relative_path.is_empty() && self.root.join(relative_path).is_file()
    }
}
