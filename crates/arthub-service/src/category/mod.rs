//! Category CRUD.

pub mod service;

pub use service::CategoryService;
