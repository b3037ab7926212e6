use press_core::entities::Submission;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `press list`: approved posts only, newest first.
pub fn run(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let posts = execute(args.limit, ctx, flags)?;
    output(&posts, flags.format)
}

fn execute(
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<Submission>> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let mut posts = ctx.store.list_approved()?;
    posts.truncate(limit);
    Ok(posts)
}
