//! Artwork handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use arthub_core::error::AppError;
use arthub_database::repositories::ArtworkFilter;
use arthub_entity::artwork::{ArtworkDetail, UpdateArtwork};
use arthub_service::artwork::CreateArtworkInput;

use crate::dto;
use crate::dto::request::{CreateArtworkRequest, UpdateArtworkRequest};
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// Listing filters accepted as query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkQuery {
    /// Category name filter.
    pub category: Option<String>,
    /// Title/description search.
    pub search: Option<String>,
    /// Artist username filter.
    pub artist: Option<String>,
}

impl From<ArtworkQuery> for ArtworkFilter {
    fn from(query: ArtworkQuery) -> Self {
        Self {
            category: query.category,
            search: query.search,
            artist: query.artist,
        }
    }
}

/// GET /api/artworks
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ArtworkQuery>,
) -> Result<Json<Vec<ArtworkDetail>>, ApiError> {
    let artworks = state.artwork_service.list(&query.into()).await?;
    Ok(Json(artworks))
}

/// GET /api/artworks/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ArtworkDetail>, ApiError> {
    let artwork = state.artwork_service.get(id).await?;
    Ok(Json(artwork))
}

/// POST /api/artworks
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<CreateArtworkRequest>,
) -> Result<impl IntoResponse, ApiError> {
    dto::validate(&req)?;

    let artwork = state
        .artwork_service
        .create(
            &user,
            CreateArtworkInput {
                title: req.title,
                description: req.description,
                image_url: req.image_url,
                price: req.price,
                stock: req.stock,
                category_id: req.category_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(artwork)))
}

/// PUT /api/artworks/{id}
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateArtworkRequest>,
) -> Result<impl IntoResponse, ApiError> {
    dto::validate(&req)?;

    let artwork = state
        .artwork_service
        .update(
            &user,
            id,
            UpdateArtwork {
                title: req.title,
                description: req.description,
                image_url: req.image_url,
                price: req.price,
                stock: req.stock,
                sale_status: req.sale_status,
                category_id: req.category_id,
            },
        )
        .await?;

    Ok(Json(artwork))
}

/// DELETE /api/artworks/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.artwork_service.delete(&user, id).await?;
    Ok(Json(MessageResponse {
        message: "Eser başarıyla silindi".to_string(),
    }))
}
