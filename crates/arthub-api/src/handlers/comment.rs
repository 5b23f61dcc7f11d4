//! Comment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use arthub_core::error::AppError;
use arthub_entity::comment::CommentWithAuthor;

use crate::dto;
use crate::dto::request::CreateCommentRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Query parameters for the comment listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentQuery {
    /// Artwork whose comments are requested.
    pub artwork_id: i64,
}

/// GET /api/comments?artwork_id=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CommentQuery>,
) -> Result<Json<Vec<CommentWithAuthor>>, ApiError> {
    let comments = state.comment_service.list_for_artwork(query.artwork_id).await?;
    Ok(Json(comments))
}

/// POST /api/comments
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    dto::validate(&req)?;

    let content = req.content.trim();
    if content.is_empty() {
        return Err(AppError::validation("Yorum gereklidir").into());
    }

    let comment = state
        .comment_service
        .create(&user, req.artwork_id, content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// DELETE /api/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.comment_service.delete(&user, id).await?;
    Ok(Json(MessageResponse {
        message: "Yorum başarıyla silindi".to_string(),
    }))
}
