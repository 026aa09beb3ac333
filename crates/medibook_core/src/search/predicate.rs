//! Composable person search predicates.
//!
//! # Responsibility
//! - Represent per-field search clauses as plain data.
//! - Combine clauses by logical AND under a type discriminator.
//!
//! # Invariants
//! - A predicate with a type discriminator never matches another variant,
//!   whatever its field clauses say.
//! - An empty clause list matches every record of the discriminated type.

use crate::model::fields::{Address, Email, Phone, Specialty, Tag};
use crate::model::person::{Person, PersonType};
use std::collections::BTreeSet;

/// One field-level search condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldClause {
    /// Matches when any keyword equals a whole word of the name, ignoring case.
    NameKeywords(Vec<String>),
    Phone(Phone),
    Email(Email),
    Address(Address),
    /// Matches specialists with exactly this specialty.
    Specialty(Specialty),
    /// Matches when the record's tag set equals this set exactly.
    Tags(BTreeSet<Tag>),
}

impl FieldClause {
    pub fn test(&self, person: &Person) -> bool {
        match self {
            Self::NameKeywords(keywords) => name_contains_any_keyword(person, keywords),
            Self::Phone(phone) => person.phone() == phone,
            Self::Email(email) => person.email() == email,
            Self::Address(address) => person.address() == address,
            Self::Specialty(specialty) => match person {
                Person::Specialist(specialist) => &specialist.specialty == specialty,
                Person::Patient(_) => false,
            },
            Self::Tags(tags) => person.tags() == tags,
        }
    }
}

/// Conjunction of field clauses, optionally restricted to one person type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPredicate {
    kind: Option<PersonType>,
    clauses: Vec<FieldClause>,
}

impl SearchPredicate {
    /// Matches every record.
    pub fn show_all() -> Self {
        Self::default()
    }

    /// Default listing predicate for one person type.
    pub fn for_type(kind: PersonType) -> Self {
        Self {
            kind: Some(kind),
            clauses: Vec::new(),
        }
    }

    /// Adds one clause to the conjunction.
    pub fn and(mut self, clause: FieldClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn kind(&self) -> Option<PersonType> {
        self.kind
    }

    pub fn clauses(&self) -> &[FieldClause] {
        &self.clauses
    }

    pub fn test(&self, person: &Person) -> bool {
        let type_matches = self
            .kind
            .map_or(true, |kind| person.person_type() == kind);
        type_matches && self.clauses.iter().all(|clause| clause.test(person))
    }
}

fn name_contains_any_keyword(person: &Person, keywords: &[String]) -> bool {
    let words = person
        .name()
        .as_str()
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        words.iter().any(|word| *word == keyword)
    })
}

#[cfg(test)]
mod tests {
    use super::{FieldClause, SearchPredicate};
    use crate::model::fields::{Address, Email, Name, Phone, Specialty, Tag};
    use crate::model::person::{Person, PersonDetails, PersonType};

    fn person(name: &str, tags: &[&str]) -> PersonDetails {
        PersonDetails::new(
            Name::parse(name).unwrap(),
            Phone::parse("91234567").unwrap(),
            Email::parse("x@example.com").unwrap(),
            Address::parse("Clementi").unwrap(),
            tags.iter().map(|tag| Tag::parse(tag).unwrap()),
        )
    }

    #[test]
    fn name_keywords_match_whole_words_ignoring_case() {
        let alice = Person::patient(person("Alice Pauline", &[]));
        let clause = FieldClause::NameKeywords(vec!["bob".to_string(), "PAULINE".to_string()]);
        assert!(clause.test(&alice));

        let partial = FieldClause::NameKeywords(vec!["Pau".to_string()]);
        assert!(!partial.test(&alice));
    }

    #[test]
    fn type_discriminator_overrides_field_clauses() {
        let patient = Person::patient(person("Alice", &[]));
        let predicate = SearchPredicate::for_type(PersonType::Specialist)
            .and(FieldClause::NameKeywords(vec!["alice".to_string()]));
        assert!(!predicate.test(&patient));
        assert!(SearchPredicate::show_all().test(&patient));
    }

    #[test]
    fn specialty_clause_never_matches_patients() {
        let patient = Person::patient(person("Alice", &[]));
        let clause = FieldClause::Specialty(Specialty::parse("Oncology").unwrap());
        assert!(!clause.test(&patient));
    }

    #[test]
    fn empty_tag_clause_matches_only_untagged_records() {
        let untagged = Person::patient(person("Alice", &[]));
        let tagged = Person::patient(person("Bob", &["urgent"]));
        let clause = FieldClause::Tags(Default::default());
        assert!(clause.test(&untagged));
        assert!(!clause.test(&tagged));
    }
}
