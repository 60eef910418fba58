//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use sealnote_core::SealnoteError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (note, config)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong password, too many attempts)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// Unreadable note envelope
    Format(String),

    /// The note could not be read or written, or the cipher failed
    Failure(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())?;
        if let Some(hint) = self.hint() {
            write!(f, "\n{}", hint)?;
        }
        Ok(())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and optional hint.
    pub fn auth_failed(message: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. } | CliError::AuthFailed { message, .. } => message,
            CliError::InvalidInput(message)
            | CliError::Format(message)
            | CliError::Failure(message) => message,
        }
    }

    fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::AuthFailed { hint, .. } => hint.as_deref(),
            CliError::InvalidInput(_) | CliError::Format(_) | CliError::Failure(_) => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Format(_) => exit_codes::FORMAT_ERROR,
            CliError::Failure(_) => exit_codes::GENERAL_ERROR,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl From<SealnoteError> for CliError {
    fn from(err: SealnoteError) -> Self {
        match err {
            SealnoteError::Format(message) => {
                CliError::Format(format!("Note file is not readable: {}", message))
            }
            SealnoteError::DecryptionFailed => CliError::auth_failed("Decryption failed."),
            SealnoteError::Validation(errors) => CliError::InvalidInput(errors.to_string()),
            SealnoteError::InvalidInput(message) => CliError::InvalidInput(message),
            err @ (SealnoteError::Storage(_)
            | SealnoteError::Io { .. }
            | SealnoteError::Crypto(_)
            | SealnoteError::Json { .. }) => CliError::Failure(err.to_string()),
        }
    }
}

/// Find the exit code for an error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    match err.downcast_ref::<SealnoteError>() {
        Some(SealnoteError::Format(_)) => super::constants::exit_codes::FORMAT_ERROR,
        Some(SealnoteError::DecryptionFailed) => super::constants::exit_codes::AUTH_FAILED,
        _ => super::constants::exit_codes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_format_error_maps_to_exit_code() {
        let err: CliError = SealnoteError::Format("bad".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::FORMAT_ERROR);
        assert!(err.to_string().contains("not readable"));
    }

    #[test]
    fn test_anyhow_exit_codes() {
        let err = anyhow::Error::new(CliError::auth_failed("nope"));
        assert_eq!(exit_code_for(&err), exit_codes::AUTH_FAILED);

        let err = anyhow::Error::new(SealnoteError::Format("x".to_string()));
        assert_eq!(exit_code_for(&err), exit_codes::FORMAT_ERROR);

        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), 1);
    }

    #[test]
    fn test_storage_errors_are_not_user_input() {
        let err: CliError = SealnoteError::Storage("permission denied".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::GENERAL_ERROR);
        assert!(err.to_string().contains("permission denied"));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CliError = SealnoteError::from(io).into();
        assert_eq!(err.exit_code(), exit_codes::GENERAL_ERROR);

        let err: CliError = SealnoteError::InvalidInput("empty".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_auth_failed_with_hint_display() {
        let err = CliError::auth_failed_with_hint("Too many attempts.", "Hint: fav");
        assert_eq!(err.to_string(), "Too many attempts.\nHint: fav");
    }
}
