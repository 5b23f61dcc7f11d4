//! JSON response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arthub_entity::user::User;

/// Public view of an account; the password hash cannot appear here
/// by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Account id.
    pub id: i64,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Role, in its lowercase wire form.
    pub role: String,
    /// Registration time.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
            created_at: user.created_at,
        }
    }
}

/// Body returned by login and registration, alongside the session
/// cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Status message.
    pub message: String,
    /// The account the fresh session belongs to.
    pub user: UserResponse,
}

/// Bare status message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Status message.
    pub message: String,
}

/// Upload response carrying the stored file's public URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Public URL under the uploads prefix.
    pub url: String,
}

/// Liveness report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Whether the database round-trip succeeded.
    pub database: bool,
}
