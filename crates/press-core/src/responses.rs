//! CLI response types returned by `press` commands.
//!
//! Each response carries the record (if any) plus the human-facing message
//! the command shows, so JSON and table output say the same thing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Submission;
use crate::enums::SubmissionStatus;

/// Shown when a submission could not be stored.
pub const SUBMIT_FAILED_MESSAGE: &str = "Submission failed. Please try again later.";

/// Shown when a status check finds no submission.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Shown when a moderation action could not be applied.
pub const MODERATION_FAILED_MESSAGE: &str = "Failed to update submission status";

/// Response from `press submit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmitResponse {
    /// Reference token the submitter keeps to check status later.
    pub reference: String,
    pub message: String,
    pub submission: Submission,
}

impl SubmitResponse {
    #[must_use]
    pub fn new(submission: Submission) -> Self {
        Self {
            reference: submission.id.clone(),
            message: format!("Submitted, reference id {}", submission.id),
            submission,
        }
    }
}

/// Response from `press status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusLookupResponse {
    pub id: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<Submission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusLookupResponse {
    #[must_use]
    pub fn from_lookup(id: &str, submission: Option<Submission>) -> Self {
        let found = submission.is_some();
        Self {
            id: id.to_string(),
            found,
            submission,
            error: (!found).then(|| NOT_FOUND_MESSAGE.to_string()),
        }
    }
}

/// Response from `press admin approve` / `press admin reject`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ModerationResponse {
    pub title: String,
    pub message: String,
    pub submission: Submission,
}

impl ModerationResponse {
    #[must_use]
    pub fn new(submission: Submission) -> Self {
        let title = match submission.status {
            SubmissionStatus::Approved => "✓ Approved!",
            SubmissionStatus::Rejected => "✓ Rejected!",
            SubmissionStatus::Pending => "✓ Reopened!",
        };
        Self {
            title: title.to_string(),
            message: format!(
                "Blog submission has been {} successfully",
                submission.status
            ),
            submission,
        }
    }
}
