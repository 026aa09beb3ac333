//! Person record model.
//!
//! # Responsibility
//! - Define the closed set of record variants (patient, specialist).
//! - Own the identity rule used for duplicate detection.
//!
//! # Invariants
//! - A record's variant is fixed at creation; edits never convert it.
//! - Two records are the same person when name and phone match,
//!   regardless of the remaining fields or the variant.

use crate::model::fields::{Address, Email, Name, Phone, Specialty, Tag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Command-line tag selecting patients.
pub const PATIENT_TAG: &str = "-pa";
/// Command-line tag selecting specialists.
pub const SPECIALIST_TAG: &str = "-sp";

/// Declared kind of person a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonType {
    Patient,
    Specialist,
}

impl PersonType {
    /// Parses a command-line type tag (`-pa` / `-sp`).
    pub fn from_tag(value: &str) -> Option<Self> {
        match value.trim() {
            PATIENT_TAG => Some(Self::Patient),
            SPECIALIST_TAG => Some(Self::Specialist),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Patient => PATIENT_TAG,
            Self::Specialist => SPECIALIST_TAG,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Specialist => "specialist",
        }
    }
}

impl Display for PersonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field set shared by every person variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDetails {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl PersonDetails {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
        }
    }
}

impl Display for PersonDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{tag}]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(flatten)]
    pub details: PersonDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialist {
    #[serde(flatten)]
    pub details: PersonDetails,
    pub specialty: Specialty,
}

/// A stored contact record.
///
/// Serialized with a `type` discriminator so seed files stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Person {
    Patient(Patient),
    Specialist(Specialist),
}

impl Person {
    pub fn patient(details: PersonDetails) -> Self {
        Self::Patient(Patient { details })
    }

    pub fn specialist(details: PersonDetails, specialty: Specialty) -> Self {
        Self::Specialist(Specialist { details, specialty })
    }

    pub fn person_type(&self) -> PersonType {
        match self {
            Self::Patient(_) => PersonType::Patient,
            Self::Specialist(_) => PersonType::Specialist,
        }
    }

    pub fn details(&self) -> &PersonDetails {
        match self {
            Self::Patient(patient) => &patient.details,
            Self::Specialist(specialist) => &specialist.details,
        }
    }

    pub fn name(&self) -> &Name {
        &self.details().name
    }

    pub fn phone(&self) -> &Phone {
        &self.details().phone
    }

    pub fn email(&self) -> &Email {
        &self.details().email
    }

    pub fn address(&self) -> &Address {
        &self.details().address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.details().tags
    }

    /// Returns the specialty for specialists, `None` for patients.
    pub fn specialty(&self) -> Option<&Specialty> {
        match self {
            Self::Patient(_) => None,
            Self::Specialist(specialist) => Some(&specialist.specialty),
        }
    }

    /// Identity rule for duplicate detection: same name and same phone.
    ///
    /// Weaker than `==`, which compares every field.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name() == other.name() && self.phone() == other.phone()
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patient(patient) => write!(f, "{}", patient.details),
            Self::Specialist(specialist) => write!(
                f,
                "{}; Specialty: {}",
                specialist.details, specialist.specialty
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Person, PersonDetails, PersonType};
    use crate::model::fields::{Address, Email, Name, Phone, Specialty, Tag};

    fn details(name: &str, phone: &str) -> PersonDetails {
        PersonDetails::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("someone@example.com").unwrap(),
            Address::parse("1 Main Street").unwrap(),
            [Tag::parse("friends").unwrap(), Tag::parse("asthma").unwrap()],
        )
    }

    #[test]
    fn type_tags_round_trip() {
        assert_eq!(PersonType::from_tag("-pa"), Some(PersonType::Patient));
        assert_eq!(PersonType::from_tag(" -sp "), Some(PersonType::Specialist));
        assert_eq!(PersonType::from_tag("-xx"), None);
        assert_eq!(PersonType::Specialist.tag(), "-sp");
    }

    #[test]
    fn same_person_ignores_other_fields_and_variant() {
        let patient = Person::patient(details("Alice", "91234567"));
        let specialist = Person::specialist(
            details("Alice", "91234567"),
            Specialty::parse("Cardiology").unwrap(),
        );
        assert!(patient.is_same_person(&specialist));
        assert_ne!(patient, specialist);

        let other_phone = Person::patient(details("Alice", "80000000"));
        assert!(!patient.is_same_person(&other_phone));
    }

    #[test]
    fn display_lists_sorted_tags_and_specialty() {
        let specialist = Person::specialist(
            details("Bob", "81234567"),
            Specialty::parse("Oncology").unwrap(),
        );
        assert_eq!(
            specialist.to_string(),
            "Bob; Phone: 81234567; Email: someone@example.com; Address: 1 Main Street; \
             Tags: [asthma][friends]; Specialty: Oncology"
        );
    }
}
