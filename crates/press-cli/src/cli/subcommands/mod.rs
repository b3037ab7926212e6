mod admin;

pub use admin::AdminCommands;
