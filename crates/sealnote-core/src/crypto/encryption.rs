//! Password-based note encryption.
//!
//! The cipher primitive is pluggable through [`Cipher`]. The default,
//! [`AgeCipher`], uses age passphrase encryption: scrypt derives the file
//! key and the salt, work factor and nonce are stored in the age header, so
//! the password is the only thing needed to open a sealed body.
//!
//! [`EncryptionService`] adds the rules the note format needs on top of the
//! primitive: empty ciphertext opens to an empty body without touching the
//! cipher, and ciphertext travels as base64 storage text.

use std::io::{Read, Write};
use std::iter;

use age::secrecy::SecretString;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::password::Password;
use crate::error::{Result, SealnoteError};

/// An opaque password-based authenticated encryption primitive.
///
/// # Contract
///
/// - `seal` output must be openable with the same password and nothing else.
/// - `open` must never panic. A wrong password, corrupted input or anything
///   that is not a sealed body returns [`SealnoteError::DecryptionFailed`].
pub trait Cipher {
    fn seal(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>>;

    fn open(&self, ciphertext: &[u8], password: &Password) -> Result<Vec<u8>>;
}

/// Age passphrase encryption (scrypt KDF, ChaCha20-Poly1305 payload).
#[derive(Debug, Clone, Copy, Default)]
pub struct AgeCipher;

impl Cipher for AgeCipher {
    fn seal(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>> {
        let encryptor = age::Encryptor::with_user_passphrase(SecretString::from(
            password.expose().to_string(),
        ));

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| SealnoteError::Crypto(format!("Failed to create encryptor: {}", e)))?;

        writer
            .write_all(plaintext)
            .map_err(|e| SealnoteError::Crypto(format!("Encryption write failed: {}", e)))?;

        writer
            .finish()
            .map_err(|e| SealnoteError::Crypto(format!("Encryption finish failed: {}", e)))?;

        Ok(encrypted)
    }

    fn open(&self, ciphertext: &[u8], password: &Password) -> Result<Vec<u8>> {
        // Every failure below means "this password does not open these bytes".
        let decryptor = age::Decryptor::new(ciphertext).map_err(|e| {
            tracing::debug!(error = %e, "ciphertext header rejected");
            SealnoteError::DecryptionFailed
        })?;

        let identity = age::scrypt::Identity::new(SecretString::from(password.expose().to_string()));
        let mut reader = decryptor
            .decrypt(iter::once(&identity as &dyn age::Identity))
            .map_err(|e| {
                tracing::debug!(error = %e, "ciphertext did not open");
                SealnoteError::DecryptionFailed
            })?;

        let mut decrypted = Vec::new();
        reader.read_to_end(&mut decrypted).map_err(|e| {
            tracing::debug!(error = %e, "ciphertext payload corrupted");
            SealnoteError::DecryptionFailed
        })?;

        Ok(decrypted)
    }
}

/// Seals and opens note bodies.
#[derive(Debug, Clone, Default)]
pub struct EncryptionService<C = AgeCipher> {
    cipher: C,
}

impl EncryptionService<AgeCipher> {
    /// Service backed by age passphrase encryption.
    pub fn new() -> Self {
        Self { cipher: AgeCipher }
    }
}

impl<C: Cipher> EncryptionService<C> {
    /// Service backed by a custom cipher primitive.
    pub fn with_cipher(cipher: C) -> Self {
        Self { cipher }
    }

    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Encrypt a note body.
    ///
    /// # Errors
    ///
    /// Returns `SealnoteError::InvalidInput` for an empty password and
    /// `SealnoteError::Crypto` if the primitive fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use sealnote_core::crypto::{EncryptionService, Password};
    ///
    /// let service = EncryptionService::new();
    /// let password = Password::new("abc123");
    /// let sealed = service.seal("secret note", &password).unwrap();
    /// assert_eq!(service.open(&sealed, &password).unwrap(), "secret note");
    /// ```
    pub fn seal(&self, plaintext: &str, password: &Password) -> Result<Vec<u8>> {
        if password.is_empty() {
            return Err(SealnoteError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }
        self.cipher.seal(plaintext.as_bytes(), password)
    }

    /// Decrypt a note body.
    ///
    /// Empty ciphertext is a note that was never sealed and opens to an
    /// empty body with any password; the cipher is not invoked.
    ///
    /// # Errors
    ///
    /// Returns `SealnoteError::DecryptionFailed` on a wrong password,
    /// corrupted ciphertext or a body that is not valid UTF-8.
    pub fn open(&self, ciphertext: &[u8], password: &Password) -> Result<String> {
        if ciphertext.is_empty() {
            return Ok(String::new());
        }
        let bytes = self.cipher.open(ciphertext, password)?;
        String::from_utf8(bytes).map_err(|_| SealnoteError::DecryptionFailed)
    }

    /// Encode ciphertext for storage in the envelope.
    pub fn to_storage_text(bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    /// Decode ciphertext read from the envelope.
    ///
    /// # Errors
    ///
    /// Returns `SealnoteError::Format` if the text is not valid base64.
    pub fn from_storage_text(text: &str) -> Result<Vec<u8>> {
        STANDARD
            .decode(text)
            .map_err(|e| SealnoteError::Format(format!("Invalid encoded data: {}", e)))
    }

    /// Seal a body straight to storage text.
    pub fn seal_to_text(&self, plaintext: &str, password: &Password) -> Result<String> {
        let sealed = self.seal(plaintext, password)?;
        Ok(Self::to_storage_text(&sealed))
    }

    /// Open a body from storage text.
    pub fn open_text(&self, encoded: &str, password: &Password) -> Result<String> {
        let bytes = Self::from_storage_text(encoded)?;
        self.open(&bytes, password)
    }
}
