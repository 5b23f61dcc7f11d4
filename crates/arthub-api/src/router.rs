//! Route definitions for the ArtHub HTTP surface.
//!
//! JSON routes are organized by domain and mounted under `/api`; pages sit
//! at the root. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor. The gatekeeper layer runs in
//! front of every route, including the static uploads service.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.upload.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(artwork_routes())
        .merge(category_routes())
        .merge(comment_routes())
        .merge(upload_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes())
        .nest_service(
            "/uploads",
            ServeDir::new(&state.config.upload.directory),
        )
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(axum_middleware::from_fn_with_state(
            state.gatekeeper.clone(),
            middleware::gate::enforce,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Artwork CRUD endpoints
fn artwork_routes() -> Router<AppState> {
    Router::new()
        .route("/artworks", get(handlers::artwork::list))
        .route("/artworks", post(handlers::artwork::create))
        .route("/artworks/{id}", get(handlers::artwork::get))
        .route("/artworks/{id}", put(handlers::artwork::update))
        .route("/artworks/{id}", delete(handlers::artwork::delete))
}

/// Category CRUD endpoints
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list))
        .route("/categories", post(handlers::category::create))
        .route("/categories/{id}", put(handlers::category::update))
        .route("/categories/{id}", delete(handlers::category::delete))
}

/// Comment endpoints
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/comments", get(handlers::comment::list))
        .route("/comments", post(handlers::comment::create))
        .route("/comments/{id}", delete(handlers::comment::delete))
}

/// Image upload endpoint
fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload", post(handlers::upload::upload))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Server-rendered pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/gallery", get(handlers::pages::gallery))
        .route("/auth/login", get(handlers::pages::login_page))
        .route("/auth/register", get(handlers::pages::register_page))
        .route("/profile", get(handlers::pages::profile))
        .route("/admin", get(handlers::pages::admin_dashboard))
        .route("/artist", get(handlers::pages::artist_dashboard))
}
