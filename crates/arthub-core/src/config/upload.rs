//! Image upload configuration.

use serde::{Deserialize, Serialize};

/// Upload handling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory where uploaded images are written.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Public URL prefix the files are served under.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    /// Maximum upload size in bytes (default 5 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            url_prefix: default_url_prefix(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_directory() -> String {
    "data/uploads".to_string()
}

fn default_url_prefix() -> String {
    "/uploads".to_string()
}

fn default_max_upload() -> u64 {
    5 * 1024 * 1024
}
