//! Image upload handler.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use arthub_core::error::AppError;

use crate::dto::response::UploadResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// POST /api/upload (multipart, field name `file`)
pub async fn upload(
    State(state): State<AppState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Geçersiz form verisi: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("dosya").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Dosya okunamadı: {e}")))?;

        let url = state
            .upload_service
            .save(&original_name, &content_type, &data)
            .await?;

        return Ok((StatusCode::CREATED, Json(UploadResponse { url })));
    }

    Err(AppError::validation("Dosya bulunamadı").into())
}
