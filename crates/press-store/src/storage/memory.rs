use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use super::SlotStorage;
use crate::error::StoreError;

/// Process-local slots, for tests and ephemeral runs.
///
/// Writes can be switched off to exercise the store's failure path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `slot` already holding `contents`.
    #[must_use]
    pub fn with_slot(slot: &str, contents: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot.to_string(), contents.to_string());
        storage
    }

    /// Current raw contents of a slot.
    #[must_use]
    pub fn contents(&self, slot: &str) -> Option<String> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(slot)
            .cloned()
    }

    /// Make every subsequent write fail with `StorageUnavailable`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        Ok(self.contents(slot))
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(
                slot,
                std::io::Error::other("memory storage is not accepting writes"),
            ));
        }
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(slot.to_string(), contents.to_string());
        Ok(())
    }
}
