//! Cookie plumbing and per-request session extraction.

pub mod cookie;
pub mod identity;

pub use cookie::{SESSION_COOKIE, clear_session_cookie, read_cookie, session_cookie};
pub use identity::SessionIdentity;

use http::HeaderMap;
use tracing::debug;

use crate::jwt::TokenDecoder;

/// Locates and verifies the session token on an incoming request.
///
/// No cookie means [`SessionIdentity::Anonymous`]; so does any
/// verification failure. Crypto and parse errors never cross this
/// boundary. Every request re-verifies independently; there is no
/// session cache to fall out of sync with the cookie.
pub fn extract_session(headers: &HeaderMap, decoder: &TokenDecoder) -> SessionIdentity {
    let Some(token) = read_cookie(headers, SESSION_COOKIE) else {
        return SessionIdentity::Anonymous;
    };

    match decoder.verify(token) {
        Ok(claims) => SessionIdentity::User(claims),
        Err(e) => {
            debug!(reason = %e, "session token rejected");
            SessionIdentity::Anonymous
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::COOKIE;

    use arthub_core::config::auth::AuthConfig;

    fn decoder() -> TokenDecoder {
        TokenDecoder::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        })
    }

    #[test]
    fn test_missing_cookie_is_anonymous() {
        let headers = HeaderMap::new();
        assert!(matches!(
            extract_session(&headers, &decoder()),
            SessionIdentity::Anonymous
        ));
    }

    #[test]
    fn test_garbage_token_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "token=not-a-jwt".parse().unwrap());
        assert!(matches!(
            extract_session(&headers, &decoder()),
            SessionIdentity::Anonymous
        ));
    }
}
