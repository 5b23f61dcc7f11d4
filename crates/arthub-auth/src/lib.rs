//! # arthub-auth
//!
//! Stateless authentication and authorization for ArtHub.
//!
//! ## Modules
//!
//! - `jwt` — session token creation and validation (HS256)
//! - `password` — Argon2id password hashing and policy enforcement
//! - `session` — cookie plumbing and per-request session extraction
//! - `policy` — pure ownership/role authorization decisions
//!
//! The server holds no session store: the signed token in the client's
//! cookie **is** the session. Every request re-verifies it independently.

pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use jwt::{Claims, IssuedToken, TokenDecoder, TokenEncoder, TokenError};
pub use password::{PasswordHasher, PasswordPolicy};
pub use policy::can_modify;
pub use session::{SessionIdentity, extract_session};
