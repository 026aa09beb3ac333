//! Repository layer abstractions and the in-memory store.
//!
//! # Responsibility
//! - Define the store contract commands mutate and read through.
//! - Keep the filtered view and identity checks behind one boundary.
//!
//! # Invariants
//! - Commands receive the repository explicitly per invocation; there is
//!   no process-wide store.

pub mod person_repo;
pub mod seed;
