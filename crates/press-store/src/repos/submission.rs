//! Submission repository: create, listings, lookup, and moderation.

use chrono::Utc;

use press_core::entities::Submission;
use press_core::enums::{SubmissionStatus, TrailOp};
use press_core::ids::generate_unique_id;
use press_core::trail::{StatusChangedDetail, TrailOperation};

use crate::error::StoreError;
use crate::service::SubmissionStore;

/// Newest first. The sort is stable, so records sharing a timestamp keep
/// their collection order.
fn sort_newest_first(submissions: &mut [Submission]) {
    submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

impl SubmissionStore {
    /// Create a pending submission and put it at the front of the collection.
    ///
    /// Blank title or content is not rejected here; callers validate with
    /// `NewSubmission::validate` first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageUnavailable` if the collection cannot be
    /// persisted.
    pub fn submit(
        &self,
        title: &str,
        author: Option<&str>,
        content: &str,
    ) -> Result<Submission, StoreError> {
        let mut all = self.load()?;
        let now = Utc::now();
        let id = generate_unique_id(|candidate| all.iter().any(|s| s.id == candidate));

        let submission = Submission {
            id,
            title: title.to_string(),
            author: author.map(String::from),
            content: content.to_string(),
            created_at: now,
            status: SubmissionStatus::Pending,
            admin_note: None,
        };

        let trail_op = TrailOperation {
            v: 1,
            ts: now.to_rfc3339(),
            op: TrailOp::Create,
            id: submission.id.clone(),
            data: serde_json::to_value(&submission)?,
        };

        all.insert(0, submission.clone());
        self.save(&all)?;
        tracing::info!(id = %submission.id, "submission created");

        self.record_trail(&trail_op);

        Ok(submission)
    }

    /// Approved submissions, newest first.
    ///
    /// # Errors
    ///
    /// Only fails if an empty or corrupt slot cannot be re-seeded.
    pub fn list_approved(&self) -> Result<Vec<Submission>, StoreError> {
        let mut approved: Vec<Submission> = self
            .load()?
            .into_iter()
            .filter(|s| s.status == SubmissionStatus::Approved)
            .collect();
        sort_newest_first(&mut approved);
        Ok(approved)
    }

    /// The submission with the given id, or `None`.
    ///
    /// # Errors
    ///
    /// Only fails if an empty or corrupt slot cannot be re-seeded.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Submission>, StoreError> {
        Ok(self.load()?.into_iter().find(|s| s.id == id))
    }

    /// Every submission regardless of status, newest first.
    ///
    /// # Errors
    ///
    /// Only fails if an empty or corrupt slot cannot be re-seeded.
    pub fn admin_list_all(&self) -> Result<Vec<Submission>, StoreError> {
        let mut all = self.load()?;
        sort_newest_first(&mut all);
        Ok(all)
    }

    /// Set a submission's status and admin note.
    ///
    /// An omitted note clears any earlier one. Moves outside the
    /// pending → approved/rejected workflow are applied but logged.
    /// Returns `None` without writing when no submission has this id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageUnavailable` if the collection cannot be
    /// persisted.
    pub fn admin_update_status(
        &self,
        id: &str,
        status: SubmissionStatus,
        admin_note: Option<&str>,
    ) -> Result<Option<Submission>, StoreError> {
        let mut all = self.load()?;
        let Some(record) = all.iter_mut().find(|s| s.id == id) else {
            tracing::debug!(%id, "status update for unknown submission");
            return Ok(None);
        };

        let from = record.status;
        if !from.can_transition_to(status) {
            tracing::warn!(%id, %from, to = %status, "re-moderating a submission outside the review workflow");
        }

        record.status = status;
        record.admin_note = admin_note.map(String::from);
        let updated = record.clone();

        let detail = StatusChangedDetail {
            from,
            to: status,
            note: updated.admin_note.clone(),
        };
        let trail_op = TrailOperation {
            v: 1,
            ts: Utc::now().to_rfc3339(),
            op: TrailOp::Transition,
            id: id.to_string(),
            data: serde_json::to_value(&detail)?,
        };

        self.save(&all)?;
        tracing::info!(%id, %from, to = %status, "submission status changed");

        self.record_trail(&trail_op);

        Ok(Some(updated))
    }

    /// Append to the trail after a successful write. The slot already holds
    /// the change, so a trail failure is logged rather than returned.
    fn record_trail(&self, op: &TrailOperation) {
        if let Err(error) = self.trail().append(op) {
            tracing::warn!(id = %op.id, op = %op.op, %error, "failed to append moderation trail");
        }
    }
}
