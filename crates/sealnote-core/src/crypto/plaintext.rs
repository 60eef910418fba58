//! Decrypted note bodies.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroizing;

/// A decrypted note body.
///
/// Wiped on drop and never printed by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Plaintext(Zeroizing<String>);

impl Plaintext {
    pub fn new(text: impl Into<String>) -> Self {
        Self(Zeroizing::new(text.into()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Plaintext {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for Plaintext {
    fn from(value: String) -> Self {
        Plaintext::new(value)
    }
}

impl From<&str> for Plaintext {
    fn from(value: &str) -> Self {
        Plaintext::new(value)
    }
}

impl fmt::Debug for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plaintext([{} bytes])", self.0.len())
    }
}
