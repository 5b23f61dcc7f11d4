//! Comment domain entities.

pub mod model;

pub use model::{Comment, CommentWithAuthor};
