//! Record search and filtering.
//!
//! # Responsibility
//! - Express find criteria as data-only predicates over `Person`.
//! - Provide the per-type default listing predicate.

pub mod predicate;
