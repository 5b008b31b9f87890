//! Studio Admin Shared Library
//!
//! This crate contains the flat view models and request/response types
//! exchanged between the backend proxy service and its typed API client,
//! plus the tolerant codec for the workout `exercises` field.

pub mod exercises;
pub mod types;

// Re-export commonly used items
pub use exercises::Exercises;
pub use types::*;
