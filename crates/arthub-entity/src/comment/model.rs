//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::user::UserRole;

/// A comment left on an artwork.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: i64,
    /// Comment body.
    pub content: String,
    /// Authoring user.
    pub user_id: i64,
    /// Commented artwork.
    pub artwork_id: i64,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author summary, newest first in listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommentWithAuthor {
    /// Unique comment identifier.
    pub id: i64,
    /// Comment body.
    pub content: String,
    /// Authoring user.
    pub user_id: i64,
    /// Author username.
    pub author_username: String,
    /// Author role.
    pub author_role: UserRole,
    /// Commented artwork.
    pub artwork_id: i64,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}
