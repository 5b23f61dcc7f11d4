//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use arthub_core::config::auth::AuthConfig;

use super::claims::Claims;

/// Why a token failed verification.
///
/// Callers that speak HTTP collapse all three to "unauthenticated"; the
/// distinction exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not three non-empty dot-separated segments, or undecodable payload.
    #[error("malformed token")]
    Malformed,
    /// Signature does not verify against the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,
    /// Expiry timestamp is in the past.
    #[error("token has expired")]
    Expired,
}

/// Validates session token strings.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0; // reference policy: no clock-skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Checks:
    /// 1. Structural shape (three non-empty segments)
    /// 2. Signature validity
    /// 3. Expiration (`now >= exp` is invalid)
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        if !has_token_shape(token) {
            return Err(TokenError::Malformed);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        // jsonwebtoken accepts exp == now; the reference policy does not.
        if token_data.claims.is_expired() {
            return Err(TokenError::Expired);
        }

        Ok(token_data.claims)
    }
}

/// Structural pre-check: exactly three non-empty dot-separated segments.
fn has_token_shape(token: &str) -> bool {
    let mut segments = 0;
    for part in token.split('.') {
        if part.is_empty() {
            return false;
        }
        segments += 1;
    }
    segments == 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::TokenEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use arthub_entity::user::{User, UserRole};

    fn auth_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: 7,
            username: "ressam".to_string(),
            email: "ressam@example.com".to_string(),
            password_hash: "$argon2id$irrelevant".to_string(),
            role: UserRole::Artist,
            created_at: now,
            updated_at: now,
        }
    }

    fn signed_with_exp(secret: &str, iat: i64, exp: i64) -> String {
        let claims = Claims {
            id: 7,
            email: "ressam@example.com".to_string(),
            role: UserRole::Artist,
            username: "ressam".to_string(),
            iat,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_round_trip_preserves_claims() {
        let config = auth_config("test-secret");
        let encoder = TokenEncoder::new(&config);
        let decoder = TokenDecoder::new(&config);

        let issued = encoder.issue(&sample_user()).unwrap();
        let claims = decoder.verify(&issued.token).unwrap();

        assert_eq!(claims.id, 7);
        assert_eq!(claims.email, "ressam@example.com");
        assert_eq!(claims.role, UserRole::Artist);
        assert_eq!(claims.username, "ressam");
        assert_eq!(claims.exp, claims.iat + 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_is_signature_failure() {
        let encoder = TokenEncoder::new(&auth_config("secret-a"));
        let decoder = TokenDecoder::new(&auth_config("secret-b"));

        let issued = encoder.issue(&sample_user()).unwrap();
        assert_eq!(
            decoder.verify(&issued.token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let decoder = TokenDecoder::new(&auth_config("test-secret"));
        let now = Utc::now().timestamp();

        let token = signed_with_exp("test-secret", now - 7200, now - 3600);
        assert_eq!(decoder.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_expiry_boundary() {
        let decoder = TokenDecoder::new(&auth_config("test-secret"));
        let now = Utc::now().timestamp();

        // exp exactly now: invalid under the no-leeway policy
        let at_boundary = signed_with_exp("test-secret", now - 3600, now);
        assert_eq!(decoder.verify(&at_boundary), Err(TokenError::Expired));

        // exp comfortably in the future: valid
        let fresh = signed_with_exp("test-secret", now, now + 3600);
        assert!(decoder.verify(&fresh).is_ok());
    }

    #[test]
    fn test_malformed_tokens() {
        let decoder = TokenDecoder::new(&auth_config("test-secret"));

        for garbage in ["", "abc", "a.b", "a.b.c.d", "a..c", ".b.c", "a.b."] {
            assert_eq!(
                decoder.verify(garbage),
                Err(TokenError::Malformed),
                "expected {garbage:?} to be malformed"
            );
        }

        // three segments but not a JWT
        assert_eq!(decoder.verify("aaa.bbb.ccc"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_token_shape() {
        assert!(has_token_shape("a.b.c"));
        assert!(!has_token_shape("a.b"));
        assert!(!has_token_shape("a.b.c.d"));
        assert!(!has_token_shape("..c"));
    }
}
