//! Artwork entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::SaleStatus;
use crate::user::UserRole;

/// An artwork listed in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Artwork {
    /// Unique artwork identifier.
    pub id: i64,
    /// Artwork title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Public URL of the uploaded image.
    pub image_url: String,
    /// Listing price in TRY.
    pub price: f64,
    /// Remaining stock.
    pub stock: i32,
    /// Sale lifecycle state.
    pub sale_status: SaleStatus,
    /// Owning category.
    pub category_id: i64,
    /// Creating artist.
    pub user_id: i64,
    /// When the artwork was created.
    pub created_at: DateTime<Utc>,
    /// When the artwork was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An artwork joined with its category name and artist summary, as
/// returned by listing queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArtworkDetail {
    /// Unique artwork identifier.
    pub id: i64,
    /// Artwork title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Public URL of the uploaded image.
    pub image_url: String,
    /// Listing price in TRY.
    pub price: f64,
    /// Remaining stock.
    pub stock: i32,
    /// Sale lifecycle state.
    pub sale_status: SaleStatus,
    /// Owning category.
    pub category_id: i64,
    /// Category name.
    pub category_name: String,
    /// Creating artist.
    pub user_id: i64,
    /// Artist username.
    pub artist_username: String,
    /// Artist role.
    pub artist_role: UserRole,
    /// When the artwork was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new artwork.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArtwork {
    /// Artwork title.
    pub title: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Public URL of the uploaded image.
    pub image_url: String,
    /// Listing price in TRY.
    pub price: f64,
    /// Initial stock (defaults to 1).
    pub stock: i32,
    /// Owning category.
    pub category_id: i64,
    /// Creating artist.
    pub user_id: i64,
}

/// Data for updating an existing artwork. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArtwork {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New image URL.
    pub image_url: Option<String>,
    /// New price.
    pub price: Option<f64>,
    /// New stock level.
    pub stock: Option<i32>,
    /// New sale status.
    pub sale_status: Option<SaleStatus>,
    /// New category.
    pub category_id: Option<i64>,
}
