//! Store error types for press-store.

use thiserror::Error;

/// Errors from submission store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage slot could not be read or written.
    #[error("Storage unavailable for slot '{slot}': {source}")]
    StorageUnavailable {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// A collection or trail payload failed to (de)serialize.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The bundled seed dataset does not match the submission shape.
    #[error("Seed data is invalid: {0}")]
    Seed(String),

    /// The moderation trail could not be read or appended.
    #[error("Trail I/O failed at {path}: {source}")]
    Trail {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn unavailable(slot: &str, source: std::io::Error) -> Self {
        Self::StorageUnavailable {
            slot: slot.to_string(),
            source,
        }
    }
}
