use press_core::entities::Submission;
use press_core::trail::TrailOperation;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `press schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for(args.type_name), flags.format)
}

fn schema_for(type_name: SchemaType) -> schemars::Schema {
    match type_name {
        SchemaType::Submission => schemars::schema_for!(Submission),
        SchemaType::Trail => schemars::schema_for!(TrailOperation),
    }
}
