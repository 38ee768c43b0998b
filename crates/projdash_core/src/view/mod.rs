//! Derived, read-only views over a board collection.
//!
//! # Responsibility
//! - Filter projects by text, type and status.
//! - Compute board statistics and per-project progress summaries.
//!
//! # Invariants
//! - Selectors never mutate the collection they read.
//! - Statistics are computed over the unfiltered collection.

pub mod filter;
pub mod progress;
pub mod stats;
