//! Moderation history read back from the trail.

use press_core::trail::TrailOperation;

use crate::error::StoreError;
use crate::service::SubmissionStore;
use crate::trail::reader::read_trail;

impl SubmissionStore {
    /// Trail operations, oldest first, optionally for one submission.
    ///
    /// Empty when the trail is disabled.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Trail` if the trail file cannot be parsed.
    pub fn history(&self, id: Option<&str>) -> Result<Vec<TrailOperation>, StoreError> {
        if !self.trail().is_enabled() {
            return Ok(Vec::new());
        }

        let mut ops = read_trail(self.trail().path())?;
        if let Some(id) = id {
            ops.retain(|op| op.id == id);
        }
        Ok(ops)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use press_core::enums::{SubmissionStatus, TrailOp};
    use press_core::trail::StatusChangedDetail;

    use crate::service::SubmissionStore;
    use crate::storage::MemoryStorage;
    use crate::trail::writer::TrailWriter;

    fn store_with_trail(dir: &std::path::Path) -> SubmissionStore {
        SubmissionStore::new(
            Arc::new(MemoryStorage::with_slot("slot", "[]")),
            "slot",
            TrailWriter::new(dir).unwrap(),
        )
    }

    #[test]
    fn mutations_are_recorded_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with_trail(temp.path());

        let created = store.submit("Hello", Some("Ann"), "World").unwrap();
        store
            .admin_update_status(&created.id, SubmissionStatus::Rejected, Some("Too short"))
            .unwrap();

        let ops = store.history(None).unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].op, TrailOp::Create);
        assert_eq!(ops[0].data["title"], "Hello");
        assert_eq!(ops[1].op, TrailOp::Transition);

        let detail: StatusChangedDetail = serde_json::from_value(ops[1].data.clone()).unwrap();
        assert_eq!(detail.from, SubmissionStatus::Pending);
        assert_eq!(detail.to, SubmissionStatus::Rejected);
        assert_eq!(detail.note.as_deref(), Some("Too short"));
    }

    #[test]
    fn history_filters_by_id() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with_trail(temp.path());

        let a = store.submit("A", None, "a").unwrap();
        store.submit("B", None, "b").unwrap();

        let ops = store.history(Some(&a.id)).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].id, a.id);
    }

    #[test]
    fn unknown_update_is_not_recorded() {
        let temp = tempfile::tempdir().unwrap();
        let store = store_with_trail(temp.path());

        store
            .admin_update_status("missing", SubmissionStatus::Approved, None)
            .unwrap();
        assert!(store.history(None).unwrap().is_empty());
    }

    #[test]
    fn disabled_trail_has_no_history() {
        let store = SubmissionStore::in_memory("slot");
        store.submit("Hello", None, "World").unwrap();
        assert!(store.history(None).unwrap().is_empty());
    }

    #[test]
    fn broken_trail_does_not_fail_mutations() {
        let temp = tempfile::tempdir().unwrap();
        let storage = Arc::new(MemoryStorage::with_slot("slot", "[]"));
        let store = SubmissionStore::new(
            storage.clone(),
            "slot",
            TrailWriter::new(temp.path()).unwrap(),
        );
        std::fs::create_dir(temp.path().join(crate::trail::TRAIL_FILE)).unwrap();

        let created = store.submit("Hello", Some("Ann"), "World").unwrap();
        assert_eq!(created.status, SubmissionStatus::Pending);

        let updated = store
            .admin_update_status(&created.id, SubmissionStatus::Approved, None)
            .unwrap()
            .expect("submission exists");
        assert_eq!(updated.status, SubmissionStatus::Approved);

        let persisted: Vec<press_core::entities::Submission> =
            serde_json::from_str(&storage.contents("slot").unwrap()).unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, created.id);
        assert_eq!(persisted[0].status, SubmissionStatus::Approved);

        assert!(store.history(None).is_err());
    }
}
