//! Entity structs for Pressroom domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod submission;

pub use submission::{NewSubmission, Submission};
