//! Comment service.

use std::sync::Arc;

use tracing::info;

use arthub_auth::jwt::Claims;
use arthub_auth::policy::can_modify;
use arthub_core::error::AppError;
use arthub_core::result::AppResult;
use arthub_database::repositories::{ArtworkRepository, CommentRepository};
use arthub_entity::comment::{Comment, CommentWithAuthor};

/// Comment listing, creation, and moderation.
#[derive(Debug, Clone)]
pub struct CommentService {
    comments: Arc<CommentRepository>,
    artworks: Arc<ArtworkRepository>,
}

impl CommentService {
    /// Create a new comment service.
    pub fn new(comments: Arc<CommentRepository>, artworks: Arc<ArtworkRepository>) -> Self {
        Self { comments, artworks }
    }

    /// List an artwork's comments, newest first.
    pub async fn list_for_artwork(&self, artwork_id: i64) -> AppResult<Vec<CommentWithAuthor>> {
        if self.artworks.find_by_id(artwork_id).await?.is_none() {
            return Err(AppError::not_found("Eser bulunamadı"));
        }

        self.comments.list_for_artwork(artwork_id).await
    }

    /// Create a comment authored by the session identity.
    pub async fn create(
        &self,
        identity: &Claims,
        artwork_id: i64,
        content: &str,
    ) -> AppResult<Comment> {
        if self.artworks.find_by_id(artwork_id).await?.is_none() {
            return Err(AppError::not_found("Eser bulunamadı"));
        }

        let comment = self.comments.create(identity.id, artwork_id, content).await?;
        info!(comment_id = comment.id, user_id = identity.id, "comment created");
        Ok(comment)
    }

    /// Delete a comment; only the author or an admin may do so.
    pub async fn delete(&self, identity: &Claims, id: i64) -> AppResult<()> {
        let existing = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Yorum bulunamadı"))?;

        if !can_modify(identity, existing.user_id) {
            return Err(AppError::authorization("Bu işlem için yetkiniz yok"));
        }

        self.comments.delete(id).await?;
        info!(comment_id = id, user_id = identity.id, "comment deleted");
        Ok(())
    }
}
