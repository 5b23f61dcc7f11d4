//! Category handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use arthub_core::error::AppError;
use arthub_entity::category::CategoryWithCount;

use crate::dto;
use crate::dto::request::CategoryRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryWithCount>>, ApiError> {
    let categories = state.category_service.list().await?;
    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(req): Json<CategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    dto::validate(&req)?;

    let category = state
        .category_service
        .create(&req.name, req.description.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /api/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<CategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    dto::validate(&req)?;

    let category = state
        .category_service
        .update(id, &req.name, req.description.as_deref())
        .await?;

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.category_service.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Kategori başarıyla silindi".to_string(),
    }))
}
