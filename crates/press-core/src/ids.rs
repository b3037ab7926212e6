//! Submission ID generation.
//!
//! IDs are random UUID v4 strings. They double as the reference token handed
//! back to the person who submitted a post.

use uuid::Uuid;

/// Generate a fresh submission ID.
#[must_use]
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate an ID for which `taken` returns false.
///
/// Used by the store with a lookup over the loaded collection, so uniqueness
/// holds within the collection regardless of the random source.
#[must_use]
pub fn generate_unique_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    loop {
        let id = generate_id();
        if !taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn generate_id_is_uuid_shaped() {
        let id = generate_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn generate_id_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let id = generate_id();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[test]
    fn generate_unique_id_retries_taken_ids() {
        let rejected = Cell::new(0);
        let id = generate_unique_id(|_| {
            let seen = rejected.get();
            rejected.set(seen + 1);
            seen < 3
        });
        assert_eq!(rejected.get(), 4);
        assert!(!id.is_empty());
    }
}
