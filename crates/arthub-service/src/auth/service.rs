//! Registration and login flows.

use std::sync::Arc;

use tracing::info;

use arthub_auth::jwt::{IssuedToken, TokenEncoder};
use arthub_auth::password::{PasswordHasher, PasswordPolicy};
use arthub_core::error::AppError;
use arthub_core::result::AppResult;
use arthub_database::repositories::UserRepository;
use arthub_entity::user::model::CreateUser;
use arthub_entity::user::{User, UserRole};

/// Validated input for creating an account.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password; hashed before it goes anywhere.
    pub password: String,
    /// Requested role.
    pub role: UserRole,
}

/// Verifies credentials and issues session tokens.
///
/// The login failure message never distinguishes "no such user" from
/// "wrong password"; both would let a caller enumerate accounts.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<UserRepository>,
    hasher: PasswordHasher,
    policy: PasswordPolicy,
    encoder: TokenEncoder,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: PasswordHasher,
        policy: PasswordPolicy,
        encoder: TokenEncoder,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
            encoder,
        }
    }

    /// Register a new account and log it in.
    ///
    /// Username and email uniqueness is case-insensitive. Admin accounts
    /// cannot be self-registered; they are created via the CLI.
    pub async fn register(&self, input: RegisterInput) -> AppResult<(User, IssuedToken)> {
        if input.role == UserRole::Admin {
            return Err(AppError::validation("Geçersiz rol"));
        }

        self.policy.validate(&input.password)?;

        if self.users.identifier_taken(&input.username, &input.email).await? {
            return Err(AppError::conflict(
                "Bu email veya kullanıcı adı zaten kullanımda",
            ));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;

        let user = self
            .users
            .create(&CreateUser {
                username: input.username,
                email: input.email,
                password_hash,
                role: input.role,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "user registered");

        let token = self.encoder.issue(&user)?;
        Ok((user, token))
    }

    /// Create an admin account (CLI only; not reachable over HTTP).
    pub async fn create_admin(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        self.policy.validate(&password)?;

        if self.users.identifier_taken(&username, &email).await? {
            return Err(AppError::conflict(
                "Bu email veya kullanıcı adı zaten kullanımda",
            ));
        }

        let password_hash = self.hasher.hash_password(&password)?;

        let user = self
            .users
            .create(&CreateUser {
                username,
                email,
                password_hash,
                role: UserRole::Admin,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "admin created");
        Ok(user)
    }

    /// Verify credentials and issue a session token.
    ///
    /// `identifier` may be a username or an email address.
    pub async fn login(&self, identifier: &str, password: &str) -> AppResult<(User, IssuedToken)> {
        let user = self.users.find_by_identifier(identifier).await?;

        let Some(user) = user else {
            return Err(Self::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(Self::invalid_credentials());
        }

        info!(user_id = user.id, username = %user.username, "user logged in");

        let token = self.encoder.issue(&user)?;
        Ok((user, token))
    }

    fn invalid_credentials() -> AppError {
        AppError::authentication("Geçersiz kullanıcı adı veya şifre")
    }
}
