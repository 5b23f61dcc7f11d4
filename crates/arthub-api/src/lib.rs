//! # arthub-api
//!
//! HTTP layer for ArtHub built on Axum.
//!
//! Provides the JSON API, the server-rendered pages, the edge gatekeeper
//! middleware that classifies and authenticates every request before a
//! handler runs, extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
