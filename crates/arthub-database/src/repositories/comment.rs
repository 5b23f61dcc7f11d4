//! Comment repository implementation.

use sqlx::PgPool;

use arthub_core::result::AppResult;
use arthub_entity::comment::{Comment, CommentWithAuthor};

use super::db_err;

/// Repository for comment operations.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        sqlx::query_as::<_, Comment>("SELECT * FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("Failed to find comment by id"))
    }

    /// List an artwork's comments, newest first, with author info.
    pub async fn list_for_artwork(&self, artwork_id: i64) -> AppResult<Vec<CommentWithAuthor>> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT co.id, co.content, co.user_id,
                    u.username AS author_username, u.role AS author_role,
                    co.artwork_id, co.created_at
             FROM comments co
             JOIN users u ON u.id = co.user_id
             WHERE co.artwork_id = $1
             ORDER BY co.created_at DESC",
        )
        .bind(artwork_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("Failed to list comments"))
    }

    /// Create a new comment and return the stored row.
    pub async fn create(&self, user_id: i64, artwork_id: i64, content: &str) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (content, user_id, artwork_id)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(content)
        .bind(user_id)
        .bind(artwork_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err("Failed to create comment"))
    }

    /// Delete a comment by primary key. Returns `true` if a row was
    /// removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err("Failed to delete comment"))?;

        Ok(result.rows_affected() > 0)
    }
}
