use press_core::trail::TrailOperation;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `press admin history`: the most recent trail operations, oldest first.
pub fn run(
    id: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let operations = execute(id, limit, ctx, flags)?;
    output(&operations, flags.format)
}

fn execute(
    id: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Vec<TrailOperation>> {
    if !ctx.store.trail().is_enabled() {
        tracing::warn!("history: trail is disabled (store.trail = false)");
    }

    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let mut operations = ctx.store.history(id.map(str::trim))?;
    let skip = operations.len().saturating_sub(limit);
    operations.drain(..skip);
    Ok(operations)
}
