//! Category repository implementation.

use sqlx::PgPool;

use arthub_core::result::AppResult;
use arthub_entity::category::{Category, CategoryWithCount};

use super::db_err;

/// Repository for category CRUD operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find category by id"))
    }

    /// List all categories with their artwork counts.
    pub async fn list_with_counts(&self) -> AppResult<Vec<CategoryWithCount>> {
        sqlx::query_as::<_, CategoryWithCount>(
            "SELECT c.id, c.name, c.description, COUNT(a.id) AS artwork_count, c.created_at
             FROM categories c
             LEFT JOIN artworks a ON a.category_id = c.id
             GROUP BY c.id
             ORDER BY c.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list categories"))
    }

    /// Check whether a category name is taken (case-insensitive),
    /// optionally excluding one id (for updates).
    pub async fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM categories
                WHERE LOWER(name) = LOWER($1) AND ($2::bigint IS NULL OR id <> $2)
            )",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to check category name"))
    }

    /// Number of artworks currently in the category.
    pub async fn artwork_count(&self, id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM artworks WHERE category_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err("Failed to count category artworks"))
    }

    /// Create a new category and return the stored row.
    pub async fn create(&self, name: &str, description: Option<&str>) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create category"))
    }

    /// Update a category's name and description.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories
             SET name = $2, description = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("Failed to update category"))
    }

    /// Delete a category by primary key. Returns `true` if a row was
    /// removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete category"))?;

        Ok(result.rows_affected() > 0)
    }
}
