//! Artwork CRUD with ownership checks.

pub mod service;

pub use service::{ArtworkService, CreateArtworkInput};
