//! JSONL trail reader.

use std::path::Path;

use press_core::trail::TrailOperation;

use crate::error::StoreError;

/// Read every operation from a trail file, oldest first.
///
/// A missing file is an empty trail.
///
/// # Errors
///
/// Returns `StoreError::Trail` if the file cannot be opened or a line fails
/// to parse.
pub fn read_trail(path: &Path) -> Result<Vec<TrailOperation>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let to_error = |source: std::io::Error| StoreError::Trail {
        path: path.display().to_string(),
        source,
    };

    serde_jsonlines::json_lines(path)
        .map_err(to_error)?
        .collect::<Result<Vec<TrailOperation>, _>>()
        .map_err(to_error)
}
