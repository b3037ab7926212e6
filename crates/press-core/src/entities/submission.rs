use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubmissionStatus;
use crate::errors::CoreError;

/// A blog post moving through the moderation workflow.
///
/// Serialized with camelCase keys; optional fields are omitted when absent
/// and accepted as either missing or `null` on read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

/// Caller-supplied fields for a new submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewSubmission {
    pub title: String,
    pub author: Option<String>,
    pub content: String,
}

impl NewSubmission {
    #[must_use]
    pub fn new(title: impl Into<String>, author: Option<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author,
            content: content.into(),
        }
    }

    /// Reject blank title or content before the payload reaches the store.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first blank required field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if self.content.trim().is_empty() {
            return Err(CoreError::Validation("content must not be empty".into()));
        }
        Ok(())
    }
}
