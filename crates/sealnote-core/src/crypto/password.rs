//! Passwords and password validation.
//!
//! A note password is held in memory only while the note is unlocked. The
//! [`Password`] type wipes its bytes when dropped and never prints them.
//! Validation rules are deliberately minimal: a password must be non-empty
//! and the confirmation must match exactly.

use std::fmt;

use thiserror::Error;
use zeroize::ZeroizeOnDrop;

/// A note password.
///
/// The buffer is zeroized on drop, including every clone.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop)]
pub struct Password {
    secret: String,
}

impl Password {
    /// Wrap a password typed by the user.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Borrow the raw password.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher operations.
    pub fn expose(&self) -> &str {
        &self.secret
    }

    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Password::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Password::new(value)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password is too short")]
    TooShort,

    #[error("Password doesn't match")]
    Mismatch,
}

/// Validation outcome for a password form (new note or change password).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub password: Option<ValidationError>,
    pub confirm: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.confirm.is_none()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = [self.password, self.confirm]
            .iter()
            .flatten()
            .map(|e| e.to_string())
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Validate a new password.
///
/// # Examples
///
/// ```
/// use sealnote_core::crypto::validate_password;
///
/// assert!(validate_password("x").is_ok());
/// assert!(validate_password("").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}

/// Validate that the confirmation matches the password exactly.
pub fn validate_confirm(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password != confirm {
        return Err(ValidationError::Mismatch);
    }
    Ok(())
}

/// Validate both fields of a password form.
///
/// Hosts may call this on every keystroke to show errors live; the state
/// machine calls it on submit.
pub fn validate_fields(password: &str, confirm: &str) -> FieldErrors {
    FieldErrors {
        password: validate_password(password).err(),
        confirm: validate_confirm(password, confirm).err(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_password_is_valid() {
        assert!(validate_password("a").is_ok());
        // Whitespace counts: only emptiness is rejected.
        assert!(validate_password(" ").is_ok());
    }

    #[test]
    fn test_empty_password_too_short() {
        let err = validate_password("").unwrap_err();
        assert_eq!(err, ValidationError::TooShort);
        assert_eq!(err.to_string(), "Password is too short");
    }

    #[test]
    fn test_confirm_mismatch() {
        let err = validate_confirm("abc123", "abc124").unwrap_err();
        assert_eq!(err.to_string(), "Password doesn't match");
        assert!(validate_confirm("abc123", "abc123").is_ok());
    }

    #[test]
    fn test_confirm_is_case_sensitive() {
        assert!(validate_confirm("Secret", "secret").is_err());
    }

    #[test]
    fn test_validate_fields_reports_both() {
        let errors = validate_fields("", "x");
        assert_eq!(errors.password, Some(ValidationError::TooShort));
        assert_eq!(errors.confirm, Some(ValidationError::Mismatch));
        assert_eq!(
            errors.to_string(),
            "Password is too short; Password doesn't match"
        );

        assert!(validate_fields("abc", "abc").is_empty());
    }

    #[test]
    fn test_empty_password_and_confirm_only_too_short() {
        let errors = validate_fields("", "");
        assert_eq!(errors.password, Some(ValidationError::TooShort));
        assert_eq!(errors.confirm, None);
    }

    #[test]
    fn test_password_debug_redacts() {
        let password = Password::new("hunter2-secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("hunter2"));

        let hex_prefix = hex::encode(&password.expose().as_bytes()[..4]);
        assert!(!debug_output.contains(&hex_prefix));
    }
}
