//! Application builder — wires router + middleware + state into an Axum app.

use axum::Router;
use sqlx::PgPool;

use arthub_core::config::AppConfig;
use arthub_core::error::AppError;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the ArtHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting ArtHub server...");

    tokio::fs::create_dir_all(&config.upload.directory)
        .await
        .map_err(|e| {
            AppError::storage(format!(
                "Failed to create upload dir '{}': {e}",
                config.upload.directory
            ))
        })?;

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("ArtHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
