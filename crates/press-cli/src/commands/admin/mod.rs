mod history;
mod list;
mod moderate;

use press_core::enums::SubmissionStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `press admin`.
pub fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AdminCommands::List { status, limit } => {
            list::run(status.as_deref(), *limit, ctx, flags)
        }
        AdminCommands::Approve { id, note } => {
            moderate::run(id, SubmissionStatus::Approved, note.as_deref(), ctx, flags)
        }
        AdminCommands::Reject { id, note } => {
            moderate::run(id, SubmissionStatus::Rejected, note.as_deref(), ctx, flags)
        }
        AdminCommands::History { id, limit } => {
            history::run(id.as_deref(), *limit, ctx, flags)
        }
    }
}
