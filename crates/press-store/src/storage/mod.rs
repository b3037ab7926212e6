//! Durable key-value slots holding one serialized collection each.
//!
//! The store reads a slot in full and writes it in full on every mutation.
//! Backends only move strings; parsing and seeding stay in the store.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreError;

/// A named-slot string store.
pub trait SlotStorage: Send + Sync {
    /// Read the slot. `Ok(None)` means the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageUnavailable` if the backend cannot be read.
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError>;

    /// Replace the slot's contents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageUnavailable` if the backend rejects the write.
    fn write(&self, slot: &str, contents: &str) -> Result<(), StoreError>;
}
