//! Password policy enforcement for new portal passwords.

use clubhub_core::config::auth::AuthConfig;
use clubhub_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length as usize,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn::zxcvbn(password, &[]);
        if estimate.score() < zxcvbn::Score::Three {
            return Err(AppError::validation(
                "Password is too weak. Please use a stronger password with more entropy.",
            ));
        }

        Ok(())
    }

    /// Validates that a new password differs from the old one.
    pub fn validate_not_same(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        if old_password == new_password {
            return Err(AppError::validation(
                "New password must be different from the current password",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator { min_length: 10 }
    }

    #[test]
    fn test_rejects_short_passwords() {
        assert!(validator().validate("short").is_err());
    }

    #[test]
    fn test_rejects_weak_passwords() {
        assert!(validator().validate("aaaaaaaaaaaa").is_err());
    }

    #[test]
    fn test_accepts_strong_passwords() {
        assert!(validator().validate("blue-otter-sings-at-dawn-42").is_ok());
    }

    #[test]
    fn test_rejects_unchanged_password() {
        assert!(validator().validate_not_same("same-pass", "same-pass").is_err());
        assert!(validator().validate_not_same("old-pass", "new-pass").is_ok());
    }
}
