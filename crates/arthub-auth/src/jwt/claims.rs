//! Session token claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use arthub_entity::user::UserRole;

/// Identity claims embedded in every session token.
///
/// A token is a snapshot taken at login or registration: id, email, role,
/// and username never change for the token's lifetime. A role change only
/// takes effect once a new token is issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub id: i64,
    /// Email address at issuance time.
    pub email: String,
    /// User role at issuance time.
    pub role: UserRole,
    /// Username for convenience.
    pub username: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired (`now >= exp`).
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_exp(exp: i64) -> Claims {
        Claims {
            id: 1,
            email: "ressam@example.com".to_string(),
            role: UserRole::Artist,
            username: "ressam".to_string(),
            iat: exp - 86400,
            exp,
        }
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let now = Utc::now().timestamp();
        // exp in the past and exp == now are both expired
        assert!(claims_with_exp(now - 10).is_expired());
        assert!(claims_with_exp(now).is_expired());
        assert!(!claims_with_exp(now + 3600).is_expired());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(claims_with_exp(1_700_000_000)).unwrap();
        for key in ["id", "email", "role", "username", "iat", "exp"] {
            assert!(json.get(key).is_some(), "missing claim field {key}");
        }
        assert_eq!(json["role"], "artist");
    }
}
