//! JSONL trail writer.
//!
//! Uses `serde_jsonlines::append_json_lines` for per-line appends.

use std::path::{Path, PathBuf};

use press_core::trail::TrailOperation;

use super::TRAIL_FILE;
use crate::error::StoreError;

/// Appends trail operations to the trail file.
pub struct TrailWriter {
    path: PathBuf,
    enabled: bool,
}

impl TrailWriter {
    /// Create a writer appending to `{trail_dir}/trail.jsonl`.
    ///
    /// Creates the directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Trail` if the directory cannot be created.
    pub fn new(trail_dir: &Path) -> Result<Self, StoreError> {
        let path = trail_dir.join(TRAIL_FILE);
        std::fs::create_dir_all(trail_dir).map_err(|source| StoreError::Trail {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            path,
            enabled: true,
        })
    }

    /// Create a disabled writer (for testing or when the trail is switched off).
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    /// Whether trail writing is currently enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a trail operation.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Trail` if the file write fails.
    pub fn append(&self, op: &TrailOperation) -> Result<(), StoreError> {
        if !self.enabled {
            return Ok(());
        }

        serde_jsonlines::append_json_lines(&self.path, [op]).map_err(|source| {
            StoreError::Trail {
                path: self.path.display().to_string(),
                source,
            }
        })
    }

    /// The trail file path. Empty when disabled.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use press_core::enums::TrailOp;

    use super::*;
    use crate::trail::reader::read_trail;

    fn op(id: &str) -> TrailOperation {
        TrailOperation {
            v: 1,
            ts: "2026-02-08T12:00:00Z".to_string(),
            op: TrailOp::Create,
            id: id.to_string(),
            data: serde_json::json!({"title": "t"}),
        }
    }

    #[test]
    fn appends_one_line_per_op() {
        let temp = tempfile::tempdir().unwrap();
        let writer = TrailWriter::new(temp.path()).unwrap();

        writer.append(&op("a")).unwrap();
        writer.append(&op("b")).unwrap();

        let text = std::fs::read_to_string(writer.path()).unwrap();
        assert_eq!(text.lines().count(), 2);

        let ops = read_trail(writer.path()).unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].id, "a");
        assert_eq!(ops[1].id, "b");
    }

    #[test]
    fn disabled_writer_is_a_noop() {
        let writer = TrailWriter::disabled();
        assert!(!writer.is_enabled());
        writer.append(&op("a")).unwrap();
        assert_eq!(writer.path(), Path::new(""));
    }
}
