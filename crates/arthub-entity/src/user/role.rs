//! Account permission levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the gallery.
///
/// `Viewer` browses and comments, `Artist` publishes artworks and gets the
/// artist dashboard, `Admin` moderates everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Browsing and commenting only.
    Viewer,
    /// Can publish and manage own artworks.
    Artist,
    /// Full moderation rights over all resources.
    Admin,
}

impl UserRole {
    /// Whether this role may moderate any resource.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether this role may publish artworks.
    pub fn is_artist(&self) -> bool {
        matches!(self, Self::Artist)
    }

    /// Lowercase wire/database form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Artist => "artist",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = arthub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(Self::Viewer),
            "artist" => Ok(Self::Artist),
            "admin" => Ok(Self::Admin),
            _ => Err(arthub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: viewer, artist, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("ARTIST".parse::<UserRole>().unwrap(), UserRole::Artist);
        assert_eq!("viewer".parse::<UserRole>().unwrap(), UserRole::Viewer);
        assert!("manager".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_predicates() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Artist.is_admin());
        assert!(UserRole::Artist.is_artist());
        assert!(!UserRole::Viewer.is_artist());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"artist\"").unwrap();
        assert_eq!(role, UserRole::Artist);
    }
}
