//! Saving uploaded images to local disk.

use std::path::Path;

use chrono::Utc;
use tracing::info;

use arthub_core::config::upload::UploadConfig;
use arthub_core::error::AppError;
use arthub_core::result::AppResult;

/// MIME types accepted for artwork images.
const ALLOWED_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Writes validated uploads into the upload directory and hands back the
/// public URL. Dimension checks and resizing are out of scope; only type
/// and size are enforced.
#[derive(Debug, Clone)]
pub struct UploadService {
    config: UploadConfig,
}

impl UploadService {
    /// Create a new upload service.
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    /// Validate and persist one uploaded file, returning its public URL.
    pub async fn save(
        &self,
        original_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> AppResult<String> {
        self.validate(content_type, data.len() as u64)?;

        let filename = unique_filename(original_name);
        let directory = Path::new(&self.config.directory);

        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|e| AppError::storage(format!("Failed to create upload dir: {e}")))?;

        let filepath = directory.join(&filename);
        tokio::fs::write(&filepath, data)
            .await
            .map_err(|e| AppError::storage(format!("Failed to write upload: {e}")))?;

        info!(file = %filename, bytes = data.len(), "upload stored");
        Ok(format!("{}/{}", self.config.url_prefix, filename))
    }

    /// Check content type and size limits.
    fn validate(&self, content_type: &str, size: u64) -> AppResult<()> {
        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(AppError::validation(
                "Geçersiz dosya türü. Sadece JPEG, PNG, WEBP ve GIF dosyaları kabul edilir",
            ));
        }

        if size > self.config.max_upload_size_bytes {
            return Err(AppError::validation(
                "Dosya boyutu çok büyük. Maksimum 5MB kabul edilir",
            ));
        }

        Ok(())
    }
}

/// Generate a collision-resistant filename keeping the original extension.
fn unique_filename(original_name: &str) -> String {
    let timestamp = Utc::now().timestamp_millis();
    let nonce: u64 = rand::random();
    let extension = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "bin".to_string());
    format!("{timestamp}-{nonce:016x}.{extension}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> UploadService {
        UploadService::new(UploadConfig::default())
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let err = service().validate("application/pdf", 100).unwrap_err();
        assert!(err.message.contains("Geçersiz dosya türü"));
    }

    #[test]
    fn test_validate_rejects_oversize() {
        let err = service().validate("image/png", 6 * 1024 * 1024).unwrap_err();
        assert!(err.message.contains("Dosya boyutu"));
    }

    #[test]
    fn test_validate_accepts_image() {
        assert!(service().validate("image/webp", 1024).is_ok());
    }

    #[test]
    fn test_unique_filename_keeps_extension() {
        let name = unique_filename("Sulu Boya.PNG");
        assert!(name.ends_with(".png"));
        assert!(!name.contains(' '));

        let fallback = unique_filename("noextension");
        assert!(fallback.ends_with(".bin"));
    }

    #[test]
    fn test_unique_filenames_differ() {
        assert_ne!(unique_filename("a.png"), unique_filename("a.png"));
    }
}
