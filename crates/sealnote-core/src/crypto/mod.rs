//! Cryptographic operations for Sealnote.
//!
//! - **Age**: passphrase-based authenticated encryption of the note body
//!   (https://age-encryption.org/), scrypt as the key derivation function
//! - **Password**: zeroize-on-drop password handling and form validation
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the sealed note file
//! - Offline brute-force attacks on the password (scrypt work factor)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Access to an unlocked session / memory
//!
//! The hint is stored in plaintext and must never contain the password.

pub mod encryption;
pub mod password;
pub mod plaintext;

pub use encryption::{AgeCipher, Cipher, EncryptionService};
pub use password::{
    validate_confirm, validate_fields, validate_password, FieldErrors, Password, ValidationError,
};
pub use plaintext::Plaintext;
