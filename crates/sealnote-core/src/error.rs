//! Error types for Sealnote core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

use crate::crypto::password::FieldErrors;

/// Result type alias for Sealnote operations.
pub type Result<T> = std::result::Result<T, SealnoteError>;

/// Core error type for Sealnote operations.
#[derive(Debug, Error)]
pub enum SealnoteError {
    /// Malformed persisted blob: bad structure, unknown version or invalid base64
    #[error("Format error: {0}")]
    Format(String),

    /// Wrong password or corrupted ciphertext
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Password / confirmation validation failed
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// Cipher failure while sealing
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Persistence gateway error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl SealnoteError {
    /// Whether the error is the recoverable wrong-password outcome.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, SealnoteError::DecryptionFailed)
    }

    /// Whether the error means the persisted document cannot be read at all.
    pub fn is_format_error(&self) -> bool {
        matches!(self, SealnoteError::Format(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_failure_message() {
        let err = SealnoteError::DecryptionFailed;
        assert_eq!(err.to_string(), "Decryption failed");
        assert!(err.is_decryption_failure());
        assert!(!err.is_format_error());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SealnoteError = io.into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
