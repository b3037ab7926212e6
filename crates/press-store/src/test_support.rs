//! Shared test utilities for press-store unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};
    use press_core::entities::Submission;
    use press_core::enums::SubmissionStatus;

    use crate::service::SubmissionStore;
    use crate::storage::MemoryStorage;
    use crate::trail::writer::TrailWriter;

    pub const TEST_SLOT: &str = "test_submissions";

    /// In-memory store with the trail disabled, plus a handle on its storage.
    ///
    /// `initial` pre-populates the slot with raw contents.
    pub fn memory_store(initial: Option<&str>) -> (SubmissionStore, Arc<MemoryStorage>) {
        let storage = Arc::new(match initial {
            Some(contents) => MemoryStorage::with_slot(TEST_SLOT, contents),
            None => MemoryStorage::new(),
        });
        let store = SubmissionStore::new(storage.clone(), TEST_SLOT, TrailWriter::disabled());
        (store, storage)
    }

    /// In-memory store starting from an empty collection (no seed records).
    pub fn empty_store() -> (SubmissionStore, Arc<MemoryStorage>) {
        memory_store(Some("[]"))
    }

    /// In-memory store whose slot holds exactly `submissions`.
    pub fn store_with(submissions: &[Submission]) -> (SubmissionStore, Arc<MemoryStorage>) {
        let json = serde_json::to_string(submissions).unwrap();
        memory_store(Some(&json))
    }

    pub fn record(id: &str, created_at: &str, status: SubmissionStatus) -> Submission {
        Submission {
            id: id.to_string(),
            title: format!("Post {id}"),
            author: None,
            content: format!("Body of {id}"),
            created_at: created_at.parse::<DateTime<Utc>>().unwrap(),
            status,
            admin_note: None,
        }
    }
}
