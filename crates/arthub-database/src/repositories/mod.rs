//! Concrete repository implementations.
//!
//! Every query error is wrapped with a short context message via
//! [`db_err`] before leaving this module.

pub mod artwork;
pub mod category;
pub mod comment;
pub mod user;

use arthub_core::error::{AppError, ErrorKind};

/// Wrap a sqlx error with a short context message.
pub(crate) fn db_err(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, context, e)
}

pub use artwork::{ArtworkFilter, ArtworkRepository};
pub use category::CategoryRepository;
pub use comment::CommentRepository;
pub use user::UserRepository;
