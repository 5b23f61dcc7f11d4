//! # arthub-entity
//!
//! Domain entity models for ArtHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod artwork;
pub mod category;
pub mod comment;
pub mod user;
