//! Identity extractors for handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use arthub_auth::jwt::Claims;
use arthub_auth::session::{SessionIdentity, extract_session};
use arthub_core::error::AppError;

use crate::error::ApiError;
use crate::middleware::gate::{FORWARDED_USER_HEADER, ForwardedIdentity};
use crate::state::AppState;

/// The verified identity of an authenticated request.
///
/// Populated by the gate; rejecting with 401 here only happens if a
/// handler requiring identity is somehow reachable on a public route.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Claims);

impl std::ops::Deref for CurrentUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ForwardedIdentity(claims)) = parts.extensions.get::<ForwardedIdentity>() {
            return Ok(CurrentUser(claims.clone()));
        }

        // The gate may run in a separate edge process; fall back to the
        // header form of the same channel.
        if let Some(value) = parts.headers.get(FORWARDED_USER_HEADER) {
            let claims = value
                .to_str()
                .ok()
                .and_then(|raw| serde_json::from_str::<Claims>(raw).ok());
            if let Some(claims) = claims {
                return Ok(CurrentUser(claims));
            }
        }

        Err(AppError::authentication("Yetkilendirme gerekli").into())
    }
}

/// Session status for public pages: `Some` when a verified session rode
/// in on the cookie, `None` otherwise.
///
/// This is always derived from the verified session; it is never a
/// cached "logged in" flag that could drift from the real cookie.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<Claims>);

impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(ForwardedIdentity(claims)) = parts.extensions.get::<ForwardedIdentity>() {
            return Ok(OptionalUser(Some(claims.clone())));
        }

        // Public routes skip gate verification; re-verify the cookie here.
        let identity = extract_session(&parts.headers, &state.token_decoder);
        Ok(OptionalUser(match identity {
            SessionIdentity::User(claims) => Some(claims),
            SessionIdentity::Anonymous => None,
        }))
    }
}
