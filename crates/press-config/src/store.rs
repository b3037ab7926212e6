//! Submission store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_data_dir() -> String {
    ".pressroom".to_string()
}

fn default_slot() -> String {
    "blog_aggregator_submissions_v1".to_string()
}

const fn default_trail() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding the slot file and the moderation trail.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Name of the storage slot holding the submission collection.
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Whether mutations are appended to `trail.jsonl`.
    #[serde(default = "default_trail")]
    pub trail: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            slot: default_slot(),
            trail: default_trail(),
        }
    }
}

impl StoreConfig {
    /// Check that the slot name can be used as a file stem.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty slot name, one with
    /// path separators, or an empty data directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.slot".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.slot.contains(['/', '\\']) || self.slot == "." || self.slot == ".." {
            return Err(ConfigError::InvalidValue {
                field: "store.slot".into(),
                reason: format!("'{}' must be a plain name, not a path", self.slot),
            });
        }
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.data_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Data directory resolved against `base` when relative.
    #[must_use]
    pub fn data_dir_in(&self, base: &Path) -> PathBuf {
        let dir = PathBuf::from(&self.data_dir);
        if dir.is_absolute() { dir } else { base.join(dir) }
    }
}
