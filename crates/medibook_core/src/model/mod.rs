//! Contact record domain model.
//!
//! # Responsibility
//! - Define validated field values and the patient/specialist records.
//! - Keep identity and display rules next to the data they describe.
//!
//! # Invariants
//! - Records are only built from already-validated field values.
//! - The variant set is closed; every decision point matches exhaustively.

pub mod fields;
pub mod person;
