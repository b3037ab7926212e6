use press_core::entities::{NewSubmission, Submission};
use press_core::responses::{SUBMIT_FAILED_MESSAGE, SubmitResponse};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `press submit`.
pub fn run(args: &SubmitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let submission = execute(args, ctx)?;
    output(&SubmitResponse::new(submission), flags.format)
}

fn execute(args: &SubmitArgs, ctx: &AppContext) -> anyhow::Result<Submission> {
    let author = args
        .author
        .as_deref()
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .map(String::from);
    let payload = NewSubmission::new(args.title.trim(), author, args.content.trim());
    payload.validate()?;

    ctx.store
        .submit(&payload.title, payload.author.as_deref(), &payload.content)
        .map_err(|error| {
            tracing::error!(%error, "submit: store write failed");
            anyhow::anyhow!(SUBMIT_FAILED_MESSAGE)
        })
}
