//! Person repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the full person store and the currently filtered view.
//! - Enforce identity uniqueness on every write path.
//!
//! # Invariants
//! - No two stored persons satisfy `Person::is_same_person`.
//! - `set_person` swaps exactly one slot or leaves the store untouched.
//! - The filtered view is derived from the store and the active predicate
//!   on every read, so it never holds stale records.

use crate::model::person::Person;
use crate::search::predicate::SearchPredicate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person store mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Target record is not in the store.
    NotFound,
    /// Write would store a second record with an existing identity.
    DuplicatePerson,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "person not found in the contact book"),
            Self::DuplicatePerson => write!(f, "this person already exists in the contact book"),
        }
    }
}

impl Error for RepoError {}

/// Store operations commands run against.
pub trait PersonRepository {
    /// Full store in insertion order.
    fn persons(&self) -> &[Person];
    /// Records accepted by the active predicate, in store order.
    fn filtered_persons(&self) -> Vec<&Person>;
    /// Whether any stored record has the same identity as `candidate`.
    fn has_person(&self, candidate: &Person) -> bool;
    fn add_person(&mut self, person: Person) -> RepoResult<()>;
    /// Replaces `target` with `edited` in place.
    fn set_person(&mut self, target: &Person, edited: Person) -> RepoResult<()>;
    fn delete_person(&mut self, target: &Person) -> RepoResult<()>;
    /// Installs `predicate` as the active filter.
    fn update_filtered_persons(&mut self, predicate: SearchPredicate);
    fn active_predicate(&self) -> &SearchPredicate;
}

/// Process-local person store with a predicate-driven view.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    persons: Vec<Person>,
    predicate: SearchPredicate,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed records, rejecting identity duplicates.
    pub fn with_persons(persons: impl IntoIterator<Item = Person>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for person in persons {
            repo.add_person(person)?;
        }
        Ok(repo)
    }

    fn position_of(&self, target: &Person) -> RepoResult<usize> {
        self.persons
            .iter()
            .position(|person| person == target)
            .ok_or(RepoError::NotFound)
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn persons(&self) -> &[Person] {
        &self.persons
    }

    fn filtered_persons(&self) -> Vec<&Person> {
        self.persons
            .iter()
            .filter(|person| self.predicate.test(person))
            .collect()
    }

    fn has_person(&self, candidate: &Person) -> bool {
        self.persons
            .iter()
            .any(|person| person.is_same_person(candidate))
    }

    fn add_person(&mut self, person: Person) -> RepoResult<()> {
        if self.has_person(&person) {
            return Err(RepoError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> RepoResult<()> {
        let index = self.position_of(target)?;
        if !target.is_same_person(&edited) && self.has_person(&edited) {
            return Err(RepoError::DuplicatePerson);
        }
        self.persons[index] = edited;
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> RepoResult<()> {
        let index = self.position_of(target)?;
        self.persons.remove(index);
        Ok(())
    }

    fn update_filtered_persons(&mut self, predicate: SearchPredicate) {
        self.predicate = predicate;
    }

    fn active_predicate(&self) -> &SearchPredicate {
        &self.predicate
    }
}
