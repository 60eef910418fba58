//! # Sealnote Core
//!
//! Core library for Sealnote - a single password-protected text note stored
//! in an encrypted envelope, with an optional plaintext hint.
//!
//! This crate provides the envelope format, encryption, and the note
//! lifecycle independent of any user interface.
//!
//! ## Architecture
//!
//! - **crypto**: age passphrase encryption, passwords, validation
//! - **storage**: envelope codec and persistence gateways
//! - **note**: state machine and session driver
//! - **fs**: atomic file writes

pub mod crypto;
pub mod error;
pub mod fs;
pub mod note;
pub mod storage;

pub use error::{Result, SealnoteError};
pub use note::Session;
pub use storage::PersistenceGateway;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
