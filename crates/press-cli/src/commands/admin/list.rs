use press_core::entities::Submission;
use press_core::enums::SubmissionStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let submissions = execute(status, limit, ctx, flags)?;
    output(&submissions, flags.format)
}

fn execute(
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<Submission>> {
    let status = status
        .map(|raw| parse_enum::<SubmissionStatus>(raw, "status"))
        .transpose()?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let mut submissions = ctx.store.admin_list_all()?;
    if let Some(status) = status {
        submissions.retain(|submission| submission.status == status);
    }
    submissions.truncate(limit);
    Ok(submissions)
}
