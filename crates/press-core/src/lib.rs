//! # press-core
//!
//! Core types, ID generation, and error types for Pressroom.
//!
//! This crate provides the foundational types shared across all Pressroom crates:
//! - The `Submission` entity and its creation payload
//! - The moderation status enum with its state machine
//! - Submission ID generation
//! - Cross-cutting error types
//! - Trail operation envelope for JSONL persistence
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod trail;
