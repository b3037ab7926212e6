use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Submit(args) => commands::submit::run(&args, ctx, flags),
        Commands::List(args) => commands::list::run(&args, ctx, flags),
        Commands::Status(args) => commands::status::run(&args, ctx, flags),
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
