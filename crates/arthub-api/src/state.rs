//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use arthub_auth::jwt::{TokenDecoder, TokenEncoder};
use arthub_auth::password::{PasswordHasher, PasswordPolicy};
use arthub_core::config::AppConfig;
use arthub_database::repositories::{
    ArtworkRepository, CategoryRepository, CommentRepository, UserRepository,
};
use arthub_service::{
    ArtworkService, AuthService, CategoryService, CommentService, UploadService,
};

use crate::middleware::gate::Gatekeeper;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token encoder.
    pub token_encoder: Arc<TokenEncoder>,
    /// Session token decoder and validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Edge gatekeeper evaluated before every handler.
    pub gatekeeper: Gatekeeper,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub user_repo: Arc<UserRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and login.
    pub auth_service: Arc<AuthService>,
    /// Artwork CRUD.
    pub artwork_service: Arc<ArtworkService>,
    /// Category CRUD.
    pub category_service: Arc<CategoryService>,
    /// Comment CRUD.
    pub comment_service: Arc<CommentService>,
    /// Image uploads.
    pub upload_service: Arc<UploadService>,
}

impl AppState {
    /// Wire repositories, auth components, and services from configuration
    /// and a database pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let artwork_repo = Arc::new(ArtworkRepository::new(db_pool.clone()));
        let category_repo = Arc::new(CategoryRepository::new(db_pool.clone()));
        let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));

        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
        let gatekeeper = Gatekeeper::new(Arc::clone(&token_decoder));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repo),
            PasswordHasher::new(),
            PasswordPolicy::new(&config.auth),
            (*token_encoder).clone(),
        ));
        let artwork_service = Arc::new(ArtworkService::new(
            Arc::clone(&artwork_repo),
            Arc::clone(&category_repo),
        ));
        let category_service = Arc::new(CategoryService::new(Arc::clone(&category_repo)));
        let comment_service = Arc::new(CommentService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&artwork_repo),
        ));
        let upload_service = Arc::new(UploadService::new(config.upload.clone()));

        Self {
            config: Arc::new(config),
            db_pool,
            token_encoder,
            token_decoder,
            gatekeeper,
            user_repo,
            auth_service,
            artwork_service,
            category_service,
            comment_service,
            upload_service,
        }
    }
}
