//! # press-store
//!
//! Submission store and moderation workflow for Pressroom.
//!
//! The whole collection lives in one named storage slot as a JSON array. Every
//! operation loads the collection, applies a read or mutation, and mutating
//! operations write the whole collection back. An empty or corrupt slot is
//! replaced by the bundled seed dataset. Mutations are also appended to a
//! JSONL trail for auditing.

pub mod error;
pub mod repos;
pub mod seed;
pub mod service;
pub mod storage;
pub mod trail;

mod test_support;

pub use error::StoreError;
pub use service::SubmissionStore;
pub use storage::{FileStorage, MemoryStorage, SlotStorage};
