//! In-memory persistence gateway.

use crate::error::{Result, SealnoteError};
use crate::storage::traits::PersistenceGateway;

/// Keeps the note blob in memory and records every save.
///
/// Useful for embedding hosts that own persistence themselves, and for tests
/// that need to observe each write.
#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    current: String,
    saves: Vec<String>,
    fail_saves: bool,
}

impl MemoryGateway {
    /// A gateway holding a note that was never saved.
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway holding an existing raw blob.
    pub fn with_contents(raw: impl Into<String>) -> Self {
        Self {
            current: raw.into(),
            ..Self::default()
        }
    }

    /// Current raw blob.
    pub fn contents(&self) -> &str {
        &self.current
    }

    /// Every blob saved, oldest first.
    pub fn saves(&self) -> &[String] {
        &self.saves
    }

    /// Make subsequent saves fail with a storage error.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&mut self) -> Result<String> {
        Ok(self.current.clone())
    }

    fn save(&mut self, raw: &str) -> Result<()> {
        if self.fail_saves {
            return Err(SealnoteError::Storage("save rejected".to_string()));
        }
        self.current = raw.to_string();
        self.saves.push(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_saves() {
        let mut gateway = MemoryGateway::new();
        assert_eq!(gateway.load().unwrap(), "");

        gateway.save("one").unwrap();
        gateway.save("two").unwrap();

        assert_eq!(gateway.contents(), "two");
        assert_eq!(gateway.saves(), ["one", "two"]);
    }

    #[test]
    fn test_failing_save_keeps_contents() {
        let mut gateway = MemoryGateway::with_contents("old");
        gateway.set_fail_saves(true);

        assert!(gateway.save("new").is_err());
        assert_eq!(gateway.contents(), "old");
        assert!(gateway.saves().is_empty());
    }
}
