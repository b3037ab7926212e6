//! Cross-cutting error types for Pressroom.
//!
//! Storage errors live in `press-store`; configuration errors in
//! `press-config`. The binary converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Pressroom crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (required field, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
