//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Upload storage configuration.
///
/// Uploaded files live under `static_root`, each category in its own
/// subdirectory. The relative path stored in the database is
/// `<subdir>/<unique-name><ext>` and is browsable as
/// `<base_url>/static/<relative-path>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all static files (posters, profile photos).
    #[serde(default = "default_static_root")]
    pub static_root: String,
    /// Maximum upload size in bytes (default 10 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            static_root: default_static_root(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_static_root() -> String {
    "./static".to_string()
}

fn default_max_upload() -> u64 {
    10 * 1024 * 1024
}
