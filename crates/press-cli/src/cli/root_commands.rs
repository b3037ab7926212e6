use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::AdminCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Submit a blog post for review.
    Submit(SubmitArgs),
    /// List approved posts, newest first.
    List(ListArgs),
    /// Check a submission by its reference id.
    Status(StatusArgs),
    /// Moderation commands.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Print the JSON Schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub content: String,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Reference id returned by `press submit`.
    pub id: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Submission,
    Trail,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}
