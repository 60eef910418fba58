//! File-backed persistence gateway.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, SealnoteError};
use crate::fs::write_atomic;
use crate::storage::traits::PersistenceGateway;

/// Persists a note as a single file.
///
/// A missing file loads as `""` (a note that was never saved). Saves go
/// through a temp file and rename so a failed save keeps the old note.
#[derive(Debug, Clone)]
pub struct FileGateway {
    path: PathBuf,
}

impl FileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Note name: the file name without its extension.
    pub fn note_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&mut self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(err) if err.kind() == ErrorKind::InvalidData => Err(SealnoteError::Format(
                format!("{} is not a text file", self.path.display()),
            )),
            Err(err) => Err(SealnoteError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn save(&mut self, raw: &str) -> Result<()> {
        write_atomic(&self.path, raw.as_bytes()).map_err(|e| {
            SealnoteError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        tracing::debug!(path = %self.path.display(), bytes = raw.len(), "note written");
        Ok(())
    }
}
