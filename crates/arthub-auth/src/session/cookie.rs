//! Session cookie reading and `Set-Cookie` construction.

use http::HeaderMap;
use http::header::COOKIE;

/// Cookie name carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Session cookie lifetime in seconds (1 day, matching the token TTL).
pub const SESSION_COOKIE_MAX_AGE: u64 = 86400;

/// Extract a cookie value from the Cookie header.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let cookie_header = headers.get(COOKIE)?.to_str().ok()?;
    for part in cookie_header.split(';') {
        let part = part.trim();
        if let Some((key, value)) = part.split_once('=') {
            if key.trim() == name {
                return Some(value.trim());
            }
        }
    }
    None
}

/// Build the `Set-Cookie` value installing a session token.
///
/// `HttpOnly` and `SameSite=Strict` always; `Secure` only when the
/// deployment says so (production), since local development runs on
/// plain HTTP.
pub fn session_cookie(token: &str, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Strict; Path=/; Max-Age={SESSION_COOKIE_MAX_AGE}{secure}"
    )
}

/// Build the `Set-Cookie` value deleting the session cookie (logout).
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Strict; Path=/; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cookie_simple() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, "token=abc123".parse().unwrap());
        assert_eq!(read_cookie(&headers, "token"), Some("abc123"));
    }

    #[test]
    fn test_read_cookie_multiple() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            "theme=dark; token=abc123; lang=tr".parse().unwrap(),
        );
        assert_eq!(read_cookie(&headers, "token"), Some("abc123"));
        assert_eq!(read_cookie(&headers, "lang"), Some("tr"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_no_header() {
        let headers = HeaderMap::new();
        assert_eq!(read_cookie(&headers, "token"), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("tok", false);
        assert!(cookie.starts_with("token=tok;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(!cookie.contains("Secure"));

        assert!(session_cookie("tok", true).ends_with("; Secure"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
