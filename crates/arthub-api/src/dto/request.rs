//! Request DTOs with validation.
//!
//! Validation rules and messages mirror the registration and listing
//! forms: username 3–30 chars from `[a-zA-Z0-9_-]`, price capped at one
//! million TRY, comments at 500 chars.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use arthub_entity::artwork::SaleStatus;

/// Registration request body.
///
/// Owner-level roles are not self-service: `role` accepts only `viewer`
/// or `artist` (parsed and checked in the handler/service).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(
        length(min = 3, max = 30, message = "Kullanıcı adı 3 ile 30 karakter arasında olmalıdır"),
        custom(function = validate_username_chars)
    )]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Geçerli bir email adresi giriniz"))]
    pub email: String,
    /// Plaintext password; strength rules are enforced by the password
    /// policy in the auth service.
    #[validate(length(min = 1, message = "Şifre gereklidir"))]
    pub password: String,
    /// Requested role; defaults to `viewer`.
    pub role: Option<String>,
}

/// Login request body. The identifier may be a username or an email.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email address.
    #[serde(alias = "email", alias = "username")]
    #[validate(length(min = 1, message = "Kullanıcı adı gereklidir"))]
    pub identifier: String,
    /// Password.
    #[validate(length(min = 1, message = "Şifre gereklidir"))]
    pub password: String,
}

/// Create artwork request body. The owner is the session identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateArtworkRequest {
    /// Artwork title.
    #[validate(length(min = 3, max = 100, message = "Başlık 3 ile 100 karakter arasında olmalıdır"))]
    pub title: String,
    /// Free-form description.
    #[validate(length(max = 1000, message = "Açıklama en fazla 1000 karakter olmalıdır"))]
    pub description: Option<String>,
    /// Public URL of the uploaded image.
    #[validate(length(min = 1, message = "Görsel gereklidir"))]
    pub image_url: String,
    /// Listing price in TRY.
    #[validate(range(min = 0.0, max = 1000000.0, message = "Fiyat 0 ile 1.000.000 TL arasında olmalıdır"))]
    pub price: f64,
    /// Initial stock; defaults to 1.
    #[validate(range(min = 0, max = 999999, message = "Geçerli bir stok miktarı giriniz"))]
    pub stock: Option<i32>,
    /// Owning category.
    pub category_id: i64,
}

/// Update artwork request body; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateArtworkRequest {
    /// New title.
    #[validate(length(min = 3, max = 100, message = "Başlık 3 ile 100 karakter arasında olmalıdır"))]
    pub title: Option<String>,
    /// New description.
    #[validate(length(max = 1000, message = "Açıklama en fazla 1000 karakter olmalıdır"))]
    pub description: Option<String>,
    /// New image URL.
    #[validate(length(min = 1, message = "Görsel gereklidir"))]
    pub image_url: Option<String>,
    /// New price.
    #[validate(range(min = 0.0, max = 1000000.0, message = "Fiyat 0 ile 1.000.000 TL arasında olmalıdır"))]
    pub price: Option<f64>,
    /// New stock level.
    #[validate(range(min = 0, max = 999999, message = "Geçerli bir stok miktarı giriniz"))]
    pub stock: Option<i32>,
    /// New sale status.
    pub sale_status: Option<SaleStatus>,
    /// New category.
    pub category_id: Option<i64>,
}

/// Create/update category request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRequest {
    /// Category name.
    #[validate(length(min = 1, message = "Kategori adı gereklidir"))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Create comment request body. The author is the session identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Commented artwork.
    pub artwork_id: i64,
    /// Comment body.
    #[validate(length(min = 1, max = 500, message = "Yorum en fazla 500 karakter olmalıdır"))]
    pub content: String,
}

/// Usernames may contain letters, digits, underscores, and dashes only.
fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("username_chars");
        error.message =
            Some("Kullanıcı adı sadece harf, rakam, alt çizgi ve tire içerebilir".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate;

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: "Gizli123!".to_string(),
            role: None,
        }
    }

    #[test]
    fn test_register_accepts_valid_input() {
        assert!(validate(&register_request("sanatci_7", "s@example.com")).is_ok());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let err = validate(&register_request("sanatci", "not-an-email")).unwrap_err();
        assert!(err.message.contains("Geçerli bir email adresi giriniz"));
    }

    #[test]
    fn test_register_rejects_bad_username() {
        assert!(validate(&register_request("ab", "s@example.com")).is_err());
        assert!(validate(&register_request("boşluk var", "s@example.com")).is_err());
        assert!(validate(&register_request(&"a".repeat(31), "s@example.com")).is_err());
    }

    #[test]
    fn test_artwork_price_range() {
        let mut req = CreateArtworkRequest {
            title: "Dijital Soyut".to_string(),
            description: None,
            image_url: "/uploads/a.png".to_string(),
            price: 1500.0,
            stock: None,
            category_id: 1,
        };
        assert!(validate(&req).is_ok());

        req.price = -1.0;
        assert!(validate(&req).is_err());

        req.price = 2_000_000.0;
        assert!(validate(&req).is_err());
    }

    #[test]
    fn test_comment_length() {
        let mut req = CreateCommentRequest {
            artwork_id: 1,
            content: "Harika bir eser".to_string(),
        };
        assert!(validate(&req).is_ok());

        req.content = String::new();
        assert!(validate(&req).is_err());

        req.content = "y".repeat(501);
        let err = validate(&req).unwrap_err();
        assert!(err.message.contains("500"));
    }

    #[test]
    fn test_login_accepts_email_alias() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email": "s@example.com", "password": "x"}"#).unwrap();
        assert_eq!(req.identifier, "s@example.com");
    }
}
