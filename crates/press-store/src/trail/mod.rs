//! JSONL moderation trail.
//!
//! Mutations are appended to `<data_dir>/trail.jsonl`. The trail is an audit
//! record; the storage slot remains the source of truth.

pub mod reader;
pub mod writer;

/// File name of the trail inside the data directory.
pub const TRAIL_FILE: &str = "trail.jsonl";
