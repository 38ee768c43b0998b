//! Board domain model.
//!
//! # Responsibility
//! - Define the canonical project/task/next-step records owned by the store.
//! - Define identifier generation used when the store creates records.
//!
//! # Invariants
//! - Project ids are unique across the board and never reused.
//! - Task and next-step ids are unique within their owning project.
//! - Status fields only hold their enumerated values.

pub mod id;
pub mod project;
