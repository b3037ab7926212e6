//! Bundled seed dataset used when the slot is empty or corrupt.

use press_core::entities::Submission;

use crate::error::StoreError;

const SEED_JSON: &str = include_str!("../seed/blogs.json");

/// Parse the bundled seed submissions.
///
/// # Errors
///
/// Returns `StoreError::Seed` if the bundled JSON does not match the
/// submission shape.
pub fn seed_submissions() -> Result<Vec<Submission>, StoreError> {
    serde_json::from_str(SEED_JSON).map_err(|e| StoreError::Seed(e.to_string()))
}
