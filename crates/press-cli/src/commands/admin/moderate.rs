use press_core::entities::Submission;
use press_core::enums::SubmissionStatus;
use press_core::errors::CoreError;
use press_core::responses::{MODERATION_FAILED_MESSAGE, ModerationResponse};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `press admin approve` and `press admin reject`.
pub fn run(
    id: &str,
    status: SubmissionStatus,
    note: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let submission = execute(id, status, note, ctx)?;
    output(&ModerationResponse::new(submission), flags.format)
}

fn execute(
    id: &str,
    status: SubmissionStatus,
    note: Option<&str>,
    ctx: &AppContext,
) -> anyhow::Result<Submission> {
    let id = id.trim();
    let note = note.map(str::trim).filter(|note| !note.is_empty());

    let updated = ctx
        .store
        .admin_update_status(id, status, note)
        .map_err(|error| {
            tracing::error!(%error, id, %status, "moderation: store write failed");
            anyhow::anyhow!(MODERATION_FAILED_MESSAGE)
        })?;

    updated.ok_or_else(|| {
        anyhow::Error::new(CoreError::NotFound {
            entity_type: "submission".to_string(),
            id: id.to_string(),
        })
        .context(MODERATION_FAILED_MESSAGE)
    })
}

#[cfg(test)]
mod tests {
    use press_core::enums::SubmissionStatus;
    use press_core::errors::CoreError;
    use press_core::responses::MODERATION_FAILED_MESSAGE;

    use super::execute;
    use crate::context::AppContext;

    #[test]
    fn approve_moves_submission_to_public_list() {
        let ctx = AppContext::in_memory();
        let created = ctx.store.submit("Hello", Some("Ann"), "World").unwrap();

        let approved = execute(&created.id, SubmissionStatus::Approved, Some("nice"), &ctx).unwrap();

        assert_eq!(approved.status, SubmissionStatus::Approved);
        assert_eq!(approved.admin_note.as_deref(), Some("nice"));
        assert!(ctx.store.list_approved().unwrap().iter().any(|s| s.id == created.id));
    }

    #[test]
    fn blank_note_is_treated_as_absent() {
        let ctx = AppContext::in_memory();
        let created = ctx.store.submit("Hello", None, "World").unwrap();

        let rejected = execute(&created.id, SubmissionStatus::Rejected, Some(" "), &ctx).unwrap();

        assert_eq!(rejected.admin_note, None);
    }

    #[test]
    fn unknown_id_is_a_distinct_failure() {
        let ctx = AppContext::in_memory();
        let before = ctx.store.admin_list_all().unwrap();

        let err = execute("nonexistent-id", SubmissionStatus::Approved, None, &ctx).unwrap_err();

        assert_eq!(err.to_string(), MODERATION_FAILED_MESSAGE);
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::NotFound { id, .. }) if id == "nonexistent-id"
        ));
        assert_eq!(ctx.store.admin_list_all().unwrap(), before);
    }

    #[test]
    fn write_failure_reports_moderation_failure() {
        let (ctx, storage) = AppContext::in_memory_with_storage();
        let created = ctx.store.submit("Hello", None, "World").unwrap();
        storage.set_fail_writes(true);

        let err = execute(&created.id, SubmissionStatus::Approved, None, &ctx).unwrap_err();

        assert_eq!(err.to_string(), MODERATION_FAILED_MESSAGE);
    }
}
