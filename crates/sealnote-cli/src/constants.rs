//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Storage, I/O or other failures not caused by the user.
    pub const GENERAL_ERROR: i32 = 1;

    /// Note or config file not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts).
    pub const AUTH_FAILED: i32 = 5;

    /// The note file is not a readable envelope.
    pub const FORMAT_ERROR: i32 = 6;
}

/// Environment variable holding the current note password.
pub const PASSWORD_ENV: &str = "SEALNOTE_PASSWORD";

/// Environment variable holding the new password for `passwd`.
pub const NEW_PASSWORD_ENV: &str = "SEALNOTE_NEW_PASSWORD";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SEALNOTE_LOG";
