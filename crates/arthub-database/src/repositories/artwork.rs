//! Artwork repository implementation.

use sqlx::PgPool;

use arthub_core::result::AppResult;
use arthub_entity::artwork::{Artwork, ArtworkDetail, CreateArtwork, UpdateArtwork};

use super::db_err;

/// Optional filters for artwork listings.
#[derive(Debug, Clone, Default)]
pub struct ArtworkFilter {
    /// Restrict to a category name (case-insensitive).
    pub category: Option<String>,
    /// Substring match over title and description (case-insensitive).
    pub search: Option<String>,
    /// Restrict to an artist username (case-insensitive).
    pub artist: Option<String>,
}

const DETAIL_SELECT: &str = "
    SELECT a.id, a.title, a.description, a.image_url, a.price, a.stock,
           a.sale_status, a.category_id, c.name AS category_name,
           a.user_id, u.username AS artist_username, u.role AS artist_role,
           a.created_at
    FROM artworks a
    JOIN categories c ON c.id = a.category_id
    JOIN users u ON u.id = a.user_id
";

/// Repository for artwork CRUD and listing operations.
#[derive(Debug, Clone)]
pub struct ArtworkRepository {
    pool: PgPool,
}

impl ArtworkRepository {
    /// Create a new artwork repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an artwork row by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Artwork>> {
        sqlx::query_as::<_, Artwork>("SELECT * FROM artworks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find artwork by id"))
    }

    /// Find an artwork with its category and artist joined in.
    pub async fn find_detail_by_id(&self, id: i64) -> AppResult<Option<ArtworkDetail>> {
        let query = format!("{DETAIL_SELECT} WHERE a.id = $1");
        sqlx::query_as::<_, ArtworkDetail>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find artwork detail"))
    }

    /// List artworks newest first, applying any combination of filters.
    pub async fn list(&self, filter: &ArtworkFilter) -> AppResult<Vec<ArtworkDetail>> {
        let search_pattern = filter.search.as_ref().map(|s| format!("%{s}%"));

        let query = format!(
            "{DETAIL_SELECT}
             WHERE ($1::text IS NULL OR LOWER(c.name) = LOWER($1))
               AND ($2::text IS NULL OR a.title ILIKE $2 OR a.description ILIKE $2)
               AND ($3::text IS NULL OR LOWER(u.username) = LOWER($3))
             ORDER BY a.created_at DESC"
        );

        sqlx::query_as::<_, ArtworkDetail>(&query)
            .bind(&filter.category)
            .bind(&search_pattern)
            .bind(&filter.artist)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("Failed to list artworks"))
    }

    /// Create a new artwork and return the stored row.
    pub async fn create(&self, artwork: &CreateArtwork) -> AppResult<Artwork> {
        sqlx::query_as::<_, Artwork>(
            "INSERT INTO artworks (title, description, image_url, price, stock, category_id, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(&artwork.title)
        .bind(&artwork.description)
        .bind(&artwork.image_url)
        .bind(artwork.price)
        .bind(artwork.stock)
        .bind(artwork.category_id)
        .bind(artwork.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create artwork"))
    }

    /// Update an artwork; unset fields keep their current value.
    pub async fn update(&self, id: i64, update: &UpdateArtwork) -> AppResult<Option<Artwork>> {
        sqlx::query_as::<_, Artwork>(
            "UPDATE artworks SET
                 title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 image_url = COALESCE($4, image_url),
                 price = COALESCE($5, price),
                 stock = COALESCE($6, stock),
                 sale_status = COALESCE($7, sale_status),
                 category_id = COALESCE($8, category_id),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.image_url)
        .bind(update.price)
        .bind(update.stock)
        .bind(update.sale_status)
        .bind(update.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to update artwork"))
    }

    /// Delete an artwork by primary key. Returns `true` if a row was
    /// removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM artworks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete artwork"))?;

        Ok(result.rows_affected() > 0)
    }
}
