//! JSON seed loading for the in-memory store.
//!
//! # Invariants
//! - Every field is re-validated while decoding; invalid seeds never load.
//! - Identity duplicates inside one seed are rejected as a whole.

use crate::model::person::Person;
use crate::repo::person_repo::{InMemoryPersonRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum SeedError {
    /// Seed text is not a valid JSON array of persons.
    Json(serde_json::Error),
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid seed data: {err}"),
            Self::Repo(err) => write!(f, "invalid seed data: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Decodes a JSON array of persons into a fresh store.
pub fn repository_from_json(json: &str) -> Result<InMemoryPersonRepository, SeedError> {
    let persons: Vec<Person> = serde_json::from_str(json)?;
    let count = persons.len();
    let repo = InMemoryPersonRepository::with_persons(persons)?;
    info!("event=seed_load module=repo status=ok persons={count}");
    Ok(repo)
}

#[cfg(test)]
mod tests {
    use super::{repository_from_json, SeedError};
    use crate::repo::person_repo::{PersonRepository, RepoError};

    #[test]
    fn loads_both_variants() {
        let repo = repository_from_json(
            r#"[
                {"type": "patient", "name": "Alice", "phone": "91234567",
                 "email": "alice@example.com", "address": "Jurong", "tags": ["diabetic"]},
                {"type": "specialist", "name": "Bob", "phone": "81234567",
                 "email": "bob@example.com", "address": "Clementi", "specialty": "Cardiology"}
            ]"#,
        )
        .expect("valid seed");
        assert_eq!(repo.persons().len(), 2);
        assert!(repo.persons()[1].specialty().is_some());
        assert!(repo.persons()[1].tags().is_empty());
    }

    #[test]
    fn rejects_invalid_field_values() {
        let err = repository_from_json(
            r#"[{"type": "patient", "name": "Alice", "phone": "12",
                 "email": "alice@example.com", "address": "Jurong"}]"#,
        )
        .expect_err("short phone must fail");
        assert!(matches!(err, SeedError::Json(_)));
    }

    #[test]
    fn rejects_duplicate_identities() {
        let err = repository_from_json(
            r#"[
                {"type": "patient", "name": "Alice", "phone": "91234567",
                 "email": "a@example.com", "address": "Jurong"},
                {"type": "patient", "name": "Alice", "phone": "91234567",
                 "email": "b@example.com", "address": "Bedok"}
            ]"#,
        )
        .expect_err("duplicate must fail");
        assert!(matches!(err, SeedError::Repo(RepoError::DuplicatePerson)));
    }
}
