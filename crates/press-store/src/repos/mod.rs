//! Store operations, one module per concern.

pub mod history;
pub mod submission;
