//! User account rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::UserRole;

/// A registered account, as stored in the `users` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Primary key, the stable subject id carried in session tokens.
    pub id: i64,
    /// Login name; uniqueness is case-insensitive.
    pub username: String,
    /// Email address; uniqueness is case-insensitive.
    pub email: String,
    /// Argon2 PHC hash string. Skipped on serialization so it can
    /// never leak into a response body.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Permission level.
    pub role: UserRole,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this account moderates everything.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Insert payload for a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login name to register.
    pub username: String,
    /// Email address to register.
    pub email: String,
    /// Already-hashed password; plaintext never reaches this type.
    pub password_hash: String,
    /// Role granted at creation.
    pub role: UserRole,
}
