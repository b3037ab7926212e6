use clap::Subcommand;

/// Moderation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List every submission, newest first.
    List {
        /// Only show submissions with this status (pending, approved, rejected).
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Approve a submission.
    Approve {
        id: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Reject a submission.
    Reject {
        id: String,
        #[arg(long)]
        note: Option<String>,
    },
    /// Show the moderation trail.
    History {
        /// Only show operations on this submission.
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
