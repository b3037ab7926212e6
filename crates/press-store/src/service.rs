//! Service layer owning storage access for the submission collection.
//!
//! `SubmissionStore` wraps a `SlotStorage` backend (the durable slot) and a
//! `TrailWriter` (JSONL audit trail). The operations callers use are
//! implemented as `impl SubmissionStore` blocks in `repos`.

use std::path::Path;
use std::sync::Arc;

use press_config::StoreConfig;
use press_core::entities::Submission;

use crate::error::StoreError;
use crate::seed::seed_submissions;
use crate::storage::{FileStorage, MemoryStorage, SlotStorage};
use crate::trail::writer::TrailWriter;

/// Sole authority over reading and mutating the submission collection.
///
/// Holds no cached state: every operation loads the whole collection from the
/// slot and mutating operations write the whole collection back.
pub struct SubmissionStore {
    storage: Arc<dyn SlotStorage>,
    slot: String,
    trail: TrailWriter,
}

impl SubmissionStore {
    /// Create a store over an existing backend.
    #[must_use]
    pub fn new(storage: Arc<dyn SlotStorage>, slot: impl Into<String>, trail: TrailWriter) -> Self {
        Self {
            storage,
            slot: slot.into(),
            trail,
        }
    }

    /// Open the file-backed store described by `config`.
    ///
    /// A relative `data_dir` is resolved against `base`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Trail` if the trail is enabled and its directory
    /// cannot be created.
    pub fn open(config: &StoreConfig, base: &Path) -> Result<Self, StoreError> {
        let data_dir = config.data_dir_in(base);
        let trail = if config.trail {
            TrailWriter::new(&data_dir)?
        } else {
            TrailWriter::disabled()
        };
        tracing::debug!(data_dir = %data_dir.display(), slot = %config.slot, "opening submission store");
        Ok(Self::new(
            Arc::new(FileStorage::new(data_dir)),
            config.slot.clone(),
            trail,
        ))
    }

    /// A store over fresh in-memory storage with the trail disabled.
    #[must_use]
    pub fn in_memory(slot: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryStorage::new()), slot, TrailWriter::disabled())
    }

    /// Name of the slot holding the collection.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Access the trail writer.
    #[must_use]
    pub const fn trail(&self) -> &TrailWriter {
        &self.trail
    }

    /// Load the full collection, seeding the slot when it is empty or corrupt.
    ///
    /// Read failures and malformed contents never reach the caller; they are
    /// logged and replaced by the seed dataset, which is persisted at once.
    pub(crate) fn load(&self) -> Result<Vec<Submission>, StoreError> {
        let raw = match self.storage.read(&self.slot) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(slot = %self.slot, %error, "slot unreadable; falling back to seed data");
                None
            }
        };

        if let Some(raw) = raw.filter(|raw| !raw.is_empty()) {
            match serde_json::from_str::<Vec<Submission>>(&raw) {
                Ok(submissions) => return Ok(submissions),
                Err(error) => {
                    tracing::warn!(slot = %self.slot, %error, "slot holds malformed data; falling back to seed data");
                }
            }
        }

        let seed = seed_submissions()?;
        self.save(&seed)?;
        tracing::info!(slot = %self.slot, count = seed.len(), "initialized slot from seed data");
        Ok(seed)
    }

    /// Persist the full collection, replacing the slot's contents.
    pub(crate) fn save(&self, submissions: &[Submission]) -> Result<(), StoreError> {
        let json = serde_json::to_string(submissions)?;
        self.storage.write(&self.slot, &json)
    }
}
