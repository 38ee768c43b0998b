//! Board state: seed data, record format, pure mutations and the owning store.
//!
//! # Responsibility
//! - Own the load/mutate/save cycle of the single board record.
//!
//! # Invariants
//! - Mutations are pure; only `BoardStore` performs storage side effects.
//! - Loading never fails to produce a usable collection.

pub mod mutations;
pub mod persist;
pub mod schema;
pub mod seed;
pub mod store;
