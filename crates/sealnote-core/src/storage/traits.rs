//! Persistence gateway trait definition.
//!
//! The note core never touches the filesystem directly. A host hands it a
//! `PersistenceGateway` that loads and saves the raw envelope text.

use crate::error::Result;

/// Loads and saves the raw persisted note text.
///
/// Implementations must ensure:
/// - `load` returns `""` for a note that does not exist yet
/// - `save` replaces the whole blob; a failed save leaves the previous blob intact
pub trait PersistenceGateway {
    /// Read the current raw blob.
    fn load(&mut self) -> Result<String>;

    /// Persist a new raw blob.
    ///
    /// # Errors
    ///
    /// Returns `SealnoteError::Storage` or `SealnoteError::Io` if the blob
    /// cannot be written. The core does not retry.
    fn save(&mut self, raw: &str) -> Result<()>;
}

impl<G: PersistenceGateway + ?Sized> PersistenceGateway for &mut G {
    fn load(&mut self) -> Result<String> {
        (**self).load()
    }

    fn save(&mut self, raw: &str) -> Result<()> {
        (**self).save(raw)
    }
}
