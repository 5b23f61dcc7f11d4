//! Edge gatekeeper: authentication and route-level authorization for
//! every inbound request, evaluated once before any handler runs.
//!
//! The gate performs no I/O beyond signature verification; ownership
//! checks that need the database happen later, inside the services.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header::LOCATION};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use arthub_auth::jwt::{Claims, TokenDecoder};
use arthub_auth::session::{SESSION_COOKIE, SessionIdentity, extract_session, read_cookie};
use arthub_entity::user::UserRole;

use crate::error::ApiErrorResponse;

/// Header carrying the verified identity to downstream handlers as JSON.
///
/// Only the gate writes it: any client-supplied value is stripped before
/// classification, so handlers may trust the channel implicitly.
pub const FORWARDED_USER_HEADER: &str = "x-forwarded-user";

/// Paths reachable without a session. Exact match only: `/gallery2` is
/// not public because `/gallery` is.
const PUBLIC_PATHS: [&str; 6] = [
    "/",
    "/auth/login",
    "/auth/register",
    "/gallery",
    "/api/auth/login",
    "/api/auth/register",
];

/// Prefixes serving static assets, public by definition.
const PUBLIC_PREFIXES: [&str; 1] = ["/uploads/"];

/// How the gate treats a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// No session required; anonymous requests pass through.
    Public,
    /// API namespace: session required, failures answer 401/403 JSON.
    Api,
    /// Page namespace: session required, failures redirect.
    Page,
}

/// Classify a request path.
pub fn classify(path: &str) -> RouteClass {
    if PUBLIC_PATHS.contains(&path) || PUBLIC_PREFIXES.iter().any(|p| path.starts_with(p)) {
        RouteClass::Public
    } else if path.starts_with("/api/") {
        RouteClass::Api
    } else {
        RouteClass::Page
    }
}

/// Role required by a path prefix, if any. `/admin/**` needs `admin`,
/// `/artist/**` needs `artist`; the same prefixes apply under `/api`.
pub fn required_role(path: &str) -> Option<UserRole> {
    let path = path.strip_prefix("/api").unwrap_or(path);
    if matches_segment_prefix(path, "/admin") {
        Some(UserRole::Admin)
    } else if matches_segment_prefix(path, "/artist") {
        Some(UserRole::Artist)
    } else {
        None
    }
}

/// Prefix match on whole path segments, so `/artist` gates `/artist/x`
/// but not `/artworks`.
fn matches_segment_prefix(path: &str, prefix: &str) -> bool {
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

/// The request-intercepting gate. Cheap to clone; holds only the token
/// decoder.
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    decoder: Arc<TokenDecoder>,
}

/// Verified identity attached to the request by the gate.
#[derive(Debug, Clone)]
pub struct ForwardedIdentity(pub Claims);

impl Gatekeeper {
    /// Create a new gatekeeper.
    pub fn new(decoder: Arc<TokenDecoder>) -> Self {
        Self { decoder }
    }
}

/// Middleware entry point: classify, authenticate, authorize, forward.
pub async fn enforce(
    State(gate): State<Gatekeeper>,
    mut request: Request,
    next: Next,
) -> Response {
    // The forwarded-identity channel belongs to the gate alone.
    request.headers_mut().remove(FORWARDED_USER_HEADER);

    let path = request.uri().path().to_string();

    match classify(&path) {
        RouteClass::Public => next.run(request).await,
        RouteClass::Api => {
            let Some(token) = read_cookie(request.headers(), SESSION_COOKIE) else {
                return unauthorized("Yetkilendirme gerekli");
            };

            let claims = match gate.decoder.verify(token) {
                Ok(claims) => claims,
                Err(e) => {
                    debug!(path = %path, reason = %e, "api token rejected");
                    return unauthorized("Geçersiz veya süresi dolmuş token");
                }
            };

            if let Some(required) = required_role(&path) {
                if claims.role != required {
                    return forbidden("Bu işlem için yetkiniz yok");
                }
            }

            attach_identity(&mut request, claims);
            next.run(request).await
        }
        RouteClass::Page => {
            let claims = match extract_session(request.headers(), &gate.decoder) {
                SessionIdentity::User(claims) => claims,
                SessionIdentity::Anonymous => return found("/auth/login"),
            };

            if let Some(required) = required_role(&path) {
                if claims.role != required {
                    return found("/");
                }
            }

            attach_identity(&mut request, claims);
            next.run(request).await
        }
    }
}

/// Attach the verified claims to the outgoing request, both as a typed
/// extension for in-process handlers and as a JSON header.
fn attach_identity(request: &mut Request, claims: Claims) {
    if let Ok(json) = serde_json::to_string(&claims) {
        if let Ok(value) = HeaderValue::from_str(&json) {
            request.headers_mut().insert(FORWARDED_USER_HEADER, value);
        }
    }
    request.extensions_mut().insert(ForwardedIdentity(claims));
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ApiErrorResponse {
            error: message.to_string(),
            code: "UNAUTHORIZED".to_string(),
        }),
    )
        .into_response()
}

fn forbidden(message: &str) -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(ApiErrorResponse {
            error: message.to_string(),
            code: "FORBIDDEN".to_string(),
        }),
    )
        .into_response()
}

/// A plain `302 Found` redirect, the status page gates answer with.
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(LOCATION, HeaderValue::from_str(location).unwrap_or(HeaderValue::from_static("/")))],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths_are_exact_match() {
        assert_eq!(classify("/"), RouteClass::Public);
        assert_eq!(classify("/gallery"), RouteClass::Public);
        assert_eq!(classify("/auth/login"), RouteClass::Public);
        assert_eq!(classify("/api/auth/login"), RouteClass::Public);

        assert_eq!(classify("/gallery2"), RouteClass::Page);
        assert_eq!(classify("/gallery/"), RouteClass::Page);
        assert_eq!(classify("/api/auth/login/x"), RouteClass::Api);
    }

    #[test]
    fn test_uploads_prefix_is_public() {
        assert_eq!(classify("/uploads/123-ab.png"), RouteClass::Public);
    }

    #[test]
    fn test_api_vs_page_split() {
        assert_eq!(classify("/api/artworks"), RouteClass::Api);
        assert_eq!(classify("/api/comments"), RouteClass::Api);
        assert_eq!(classify("/profile"), RouteClass::Page);
        assert_eq!(classify("/admin"), RouteClass::Page);
    }

    #[test]
    fn test_role_prefixes() {
        assert_eq!(required_role("/admin"), Some(UserRole::Admin));
        assert_eq!(required_role("/admin/users"), Some(UserRole::Admin));
        assert_eq!(required_role("/artist/dashboard"), Some(UserRole::Artist));
        assert_eq!(required_role("/api/admin/reports"), Some(UserRole::Admin));

        // segment-aware: /artworks is not /artist-gated
        assert_eq!(required_role("/artworks"), None);
        assert_eq!(required_role("/api/artworks"), None);
        assert_eq!(required_role("/administrator"), None);
        assert_eq!(required_role("/profile"), None);
    }
}
