use anyhow::Context;
use press_core::responses::StatusLookupResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatusArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `press status`.
///
/// An unknown id is not an error: the response carries `found: false` and a
/// "Not found" message.
pub fn run(args: &StatusArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = execute(&args.id, ctx)?;
    output(&response, flags.format)
}

fn execute(id: &str, ctx: &AppContext) -> anyhow::Result<StatusLookupResponse> {
    let id = id.trim();
    let submission = ctx
        .store
        .get_by_id(id)
        .with_context(|| format!("failed to look up submission {id}"))?;
    Ok(StatusLookupResponse::from_lookup(id, submission))
}
