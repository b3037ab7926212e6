//! Status and trail enums for Pressroom.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `SubmissionStatus` exposes `allowed_next_states()` describing the intended
//! moderation workflow; the store reports moves outside it but does not refuse them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SubmissionStatus
// ---------------------------------------------------------------------------

/// Moderation state of a submission.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    /// Check whether transitioning to `next` is part of the workflow.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Approved and rejected submissions have left the review queue.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrailOp
// ---------------------------------------------------------------------------

/// Kind of mutation recorded in the moderation trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TrailOp {
    Create,
    Transition,
}

impl TrailOp {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Transition => "transition",
        }
    }
}

impl fmt::Display for TrailOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SubmissionStatus::Pending, SubmissionStatus::Approved, true)]
    #[case(SubmissionStatus::Pending, SubmissionStatus::Rejected, true)]
    #[case(SubmissionStatus::Pending, SubmissionStatus::Pending, false)]
    #[case(SubmissionStatus::Approved, SubmissionStatus::Rejected, false)]
    #[case(SubmissionStatus::Approved, SubmissionStatus::Pending, false)]
    #[case(SubmissionStatus::Rejected, SubmissionStatus::Approved, false)]
    fn submission_transitions(
        #[case] from: SubmissionStatus,
        #[case] to: SubmissionStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }

    #[test]
    fn only_pending_is_open() {
        assert!(!SubmissionStatus::Pending.is_terminal());
        assert!(SubmissionStatus::Approved.is_terminal());
        assert!(SubmissionStatus::Rejected.is_terminal());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&SubmissionStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        let parsed: SubmissionStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(parsed, SubmissionStatus::Rejected);
    }

    #[test]
    fn display_matches_as_str() {
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Approved,
            SubmissionStatus::Rejected,
        ] {
            assert_eq!(status.to_string(), status.as_str());
        }
        assert_eq!(TrailOp::Transition.to_string(), "transition");
    }
}
