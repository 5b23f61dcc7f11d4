//! Typed configuration, one submodule per section.
//!
//! Configuration merges three layers, later layers winning:
//! `config/default.toml`, then `config/<env>.toml`, then environment
//! variables prefixed `ARTHUB` with `__` as the nesting separator.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod upload;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub use self::app::ServerConfig;
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::upload::UploadConfig;

/// Everything the application reads at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Session token and password settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Image upload settings.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load and validate the merged configuration for `env`
    /// (`development`, `production`, ...).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let merged = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ARTHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to read config: {e}")))?;

        let config: Self = merged
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Invalid config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that have no safe default.
    ///
    /// The session-signing secret must come from a config overlay or the
    /// environment; an empty secret would let anyone forge tokens, so
    /// startup is refused instead of falling back to a built-in value.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret is not set. Provide it via config or ARTHUB__AUTH__JWT_SECRET",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config(secret: &str) -> AppConfig {
        AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url: "postgres://localhost/arthub".to_string(),
                max_connections: 20,
                min_connections: 5,
                connect_timeout_seconds: 10,
                idle_timeout_seconds: 300,
            },
            auth: AuthConfig {
                jwt_secret: secret.to_string(),
                ..AuthConfig::default()
            },
            upload: UploadConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_validate_rejects_missing_secret() {
        assert!(minimal_config("").validate().is_err());
        assert!(minimal_config("   ").validate().is_err());
    }

    #[test]
    fn test_validate_accepts_real_secret() {
        assert!(minimal_config("a-long-random-secret").validate().is_ok());
    }
}
