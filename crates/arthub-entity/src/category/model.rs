//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An artwork category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Category name, unique case-insensitively.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A category joined with its artwork count, as returned by listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryWithCount {
    /// Unique category identifier.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Number of artworks in the category.
    pub artwork_count: i64,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}
