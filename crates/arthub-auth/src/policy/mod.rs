//! Pure authorization decisions.
//!
//! Ownership is data-dependent, so these checks run per-object after the
//! resource is fetched; the edge gate cannot decide them from the path.

use crate::jwt::Claims;

/// Whether the identity may edit or delete a resource owned by `owner_id`.
///
/// Admins may modify anything; everyone else only what they own. The same
/// rule applies to artworks and comments.
pub fn can_modify(identity: &Claims, owner_id: i64) -> bool {
    identity.role.is_admin() || identity.id == owner_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use arthub_entity::user::UserRole;

    fn identity(id: i64, role: UserRole) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            id,
            email: format!("user{id}@example.com"),
            role,
            username: format!("user{id}"),
            iat: now,
            exp: now + 86400,
        }
    }

    #[test]
    fn test_all_quadrants() {
        // admin, owner
        assert!(can_modify(&identity(3, UserRole::Admin), 3));
        // admin, non-owner
        assert!(can_modify(&identity(3, UserRole::Admin), 7));
        // non-admin, owner
        assert!(can_modify(&identity(7, UserRole::Artist), 7));
        assert!(can_modify(&identity(7, UserRole::Viewer), 7));
        // non-admin, non-owner
        assert!(!can_modify(&identity(9, UserRole::Artist), 7));
        assert!(!can_modify(&identity(9, UserRole::Viewer), 7));
    }
}
