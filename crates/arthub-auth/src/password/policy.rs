//! Password policy enforcement for new passwords.

use arthub_core::config::auth::AuthConfig;
use arthub_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured rules.
    ///
    /// Returns `Ok(())` if the password meets all requirements, or an
    /// error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Şifre en az {} karakter olmalıdır",
                self.min_length
            )));
        }

        let has_upper = password.chars().any(|c| c.is_uppercase());
        let has_lower = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| !c.is_alphanumeric());

        if !(has_upper && has_lower && has_digit && has_special) {
            return Err(AppError::validation(
                "Şifre en az bir büyük harf, bir küçük harf, bir rakam ve bir özel karakter içermelidir",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy::new(&AuthConfig::default())
    }

    #[test]
    fn test_accepts_strong_password() {
        assert!(policy().validate("Gizli123!").is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        assert!(policy().validate("Gz1!").is_err());
    }

    #[test]
    fn test_rejects_missing_character_classes() {
        assert!(policy().validate("hepsikucuk1!").is_err());
        assert!(policy().validate("HEPSIBUYUK1!").is_err());
        assert!(policy().validate("RakamYok!!").is_err());
        assert!(policy().validate("Ozelkarakteryok1").is_err());
    }
}
