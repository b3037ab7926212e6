use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::SlotStorage;
use crate::error::StoreError;

/// Slots stored as `<dir>/<slot>.json`.
///
/// Writes go to a temp file in the same directory and are renamed over the
/// slot, so readers never observe a partial collection.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing the given slot.
    #[must_use]
    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(slot)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::unavailable(slot, error)),
        }
    }

    fn write(&self, slot: &str, contents: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StoreError::unavailable(slot, e))?;

        let mut file =
            NamedTempFile::new_in(&self.dir).map_err(|e| StoreError::unavailable(slot, e))?;
        file.write_all(contents.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| StoreError::unavailable(slot, e))?;
        file.persist(self.slot_path(slot))
            .map_err(|e| StoreError::unavailable(slot, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_none() {
        let temp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp.path());
        assert_eq!(storage.read("nothing_here").unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let temp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp.path().join("nested"));

        storage.write("slot", "[1,2,3]").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(temp.path().join("nested/slot.json").is_file());

        storage.write("slot", "[]").unwrap();
        assert_eq!(storage.read("slot").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn write_leaves_no_temp_files() {
        let temp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp.path());
        storage.write("slot", "[]").unwrap();

        let names: Vec<String> = std::fs::read_dir(temp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["slot.json".to_string()]);
    }

    #[test]
    fn unreadable_slot_is_unavailable() {
        let temp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(temp.path());
        // A directory where the slot file should be cannot be read as a string.
        std::fs::create_dir(storage.slot_path("slot")).unwrap();

        let result = storage.read("slot");
        assert!(matches!(result, Err(StoreError::StorageUnavailable { .. })));
    }
}
