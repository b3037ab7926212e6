//! JSONL trail operation envelope.
//!
//! Every mutation in Pressroom is recorded as a `TrailOperation` appended to
//! `<data_dir>/trail.jsonl`. The trail is an audit record; the storage slot
//! stays the source of truth.
//!
//! The `v` field supports schema versioning: trail lines without a `v` field
//! deserialize with `v == 1` via `#[serde(default)]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SubmissionStatus, TrailOp};

/// Default trail version for lines written without one.
const fn default_trail_version() -> u32 {
    1
}

/// A single operation recorded in the JSONL trail.
///
/// `data` holds the full submission for `Create` ops and a
/// [`StatusChangedDetail`] for `Transition` ops.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrailOperation {
    /// Schema version. Defaults to 1 when missing.
    #[serde(default = "default_trail_version")]
    pub v: u32,

    /// ISO 8601 timestamp of the operation.
    pub ts: String,

    /// What kind of mutation this represents.
    pub op: TrailOp,

    /// ID of the affected submission.
    pub id: String,

    /// Operation payload. Schema depends on `op`.
    pub data: serde_json::Value,
}

/// Payload of a `Transition` trail operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusChangedDetail {
    pub from: SubmissionStatus,
    pub to: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
