//! Storage abstraction for Sealnote.
//!
//! This module defines the note envelope codec and the
//! `PersistenceGateway` trait through which a host loads and saves the
//! raw envelope text.
//!
//! ## Architecture
//!
//! The note core is backend-agnostic:
//! - `FileGateway`: one file per note, atomic replace on save
//! - `MemoryGateway`: in-memory blob, records each save
//!
//! ## Security
//!
//! Only the envelope ever reaches a gateway. The envelope carries the
//! ciphertext and the plaintext hint; passwords and decrypted bodies never
//! leave the session.

pub mod envelope;
pub mod file;
pub mod memory;
pub mod traits;

pub use envelope::{decode, encode, format_hint, is_supported_extension, Envelope};
pub use file::FileGateway;
pub use memory::MemoryGateway;
pub use traits::PersistenceGateway;
