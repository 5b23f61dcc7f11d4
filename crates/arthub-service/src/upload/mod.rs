//! Image upload handling.

pub mod service;

pub use service::UploadService;
