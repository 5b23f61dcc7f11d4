//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and session token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    ///
    /// No default is provided on purpose; see `AppConfig::validate`.
    #[serde(default)]
    pub jwt_secret: String,
    /// Session token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Whether session cookies carry the `Secure` attribute.
    ///
    /// Off by default for local development; the production overlay turns
    /// it on.
    #[serde(default)]
    pub secure_cookies: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: default_token_ttl(),
            password_min_length: default_password_min(),
            secure_cookies: false,
        }
    }
}

fn default_token_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    8
}
