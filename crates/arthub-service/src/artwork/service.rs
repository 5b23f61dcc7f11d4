//! Artwork service.

use std::sync::Arc;

use tracing::info;

use arthub_auth::jwt::Claims;
use arthub_auth::policy::can_modify;
use arthub_core::error::AppError;
use arthub_core::result::AppResult;
use arthub_database::repositories::{ArtworkFilter, ArtworkRepository, CategoryRepository};
use arthub_entity::artwork::{Artwork, ArtworkDetail, CreateArtwork, UpdateArtwork};

/// Input for creating an artwork. The owner comes from the verified
/// session, never from the request body.
#[derive(Debug, Clone)]
pub struct CreateArtworkInput {
    /// Artwork title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Public URL of the uploaded image.
    pub image_url: String,
    /// Listing price in TRY.
    pub price: f64,
    /// Initial stock.
    pub stock: Option<i32>,
    /// Owning category.
    pub category_id: i64,
}

/// Artwork listing, creation, and moderation.
#[derive(Debug, Clone)]
pub struct ArtworkService {
    artworks: Arc<ArtworkRepository>,
    categories: Arc<CategoryRepository>,
}

impl ArtworkService {
    /// Create a new artwork service.
    pub fn new(artworks: Arc<ArtworkRepository>, categories: Arc<CategoryRepository>) -> Self {
        Self {
            artworks,
            categories,
        }
    }

    /// List artworks with optional category/search/artist filters.
    pub async fn list(&self, filter: &ArtworkFilter) -> AppResult<Vec<ArtworkDetail>> {
        self.artworks.list(filter).await
    }

    /// Fetch a single artwork with category and artist info.
    pub async fn get(&self, id: i64) -> AppResult<ArtworkDetail> {
        self.artworks
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Eser bulunamadı"))
    }

    /// Create an artwork owned by the session identity.
    pub async fn create(&self, identity: &Claims, input: CreateArtworkInput) -> AppResult<Artwork> {
        if self.categories.find_by_id(input.category_id).await?.is_none() {
            return Err(AppError::not_found("Kategori bulunamadı"));
        }

        let artwork = self
            .artworks
            .create(&CreateArtwork {
                title: input.title,
                description: input.description,
                image_url: input.image_url,
                price: input.price,
                stock: input.stock.unwrap_or(1),
                category_id: input.category_id,
                user_id: identity.id,
            })
            .await?;

        info!(artwork_id = artwork.id, user_id = identity.id, "artwork created");
        Ok(artwork)
    }

    /// Update an artwork; only the owner or an admin may do so.
    pub async fn update(
        &self,
        identity: &Claims,
        id: i64,
        update: UpdateArtwork,
    ) -> AppResult<Artwork> {
        let existing = self
            .artworks
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Eser bulunamadı"))?;

        if !can_modify(identity, existing.user_id) {
            return Err(AppError::authorization("Bu işlem için yetkiniz yok"));
        }

        if let Some(category_id) = update.category_id {
            if self.categories.find_by_id(category_id).await?.is_none() {
                return Err(AppError::not_found("Kategori bulunamadı"));
            }
        }

        self.artworks
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Eser bulunamadı"))
    }

    /// Delete an artwork; only the owner or an admin may do so.
    ///
    /// Deleting an id that no longer exists reports not-found rather than
    /// failing, so the operation is safe to retry.
    pub async fn delete(&self, identity: &Claims, id: i64) -> AppResult<()> {
        let existing = self
            .artworks
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Eser bulunamadı"))?;

        if !can_modify(identity, existing.user_id) {
            return Err(AppError::authorization("Bu işlem için yetkiniz yok"));
        }

        self.artworks.delete(id).await?;
        info!(artwork_id = id, user_id = identity.id, "artwork deleted");
        Ok(())
    }
}
