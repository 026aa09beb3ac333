//! Partial-update edit command.
//!
//! # Responsibility
//! - Describe which fields of one person an edit replaces.
//! - Merge the description over the record at a display index and commit
//!   the result through the repository.
//!
//! # Invariants
//! - A descriptor always carries at least one present field.
//! - Absent fields keep the existing value; a present tag set replaces the
//!   whole existing set, and an empty present set clears it.
//! - The descriptor variant must match the target record variant.
//! - A specialty on a patient edit survives building and is rejected at
//!   merge time, after the index has been resolved.
//! - Any failure leaves the store untouched.

use crate::command::{person_at, CommandError, CommandResult, DisplayIndex};
use crate::model::fields::{Address, Email, Name, Phone, Specialty, Tag};
use crate::model::person::{Patient, Person, PersonDetails, PersonType, Specialist};
use crate::repo::person_repo::PersonRepository;
use crate::search::predicate::SearchPredicate;
use log::{info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const COMMAND_WORD: &str = "edit";

/// Optional replacements for the fields every person has.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsEdit {
    name: Option<Name>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    tags: Option<BTreeSet<Tag>>,
}

impl DetailsEdit {
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// `Some(empty)` means "clear all tags"; `None` means "leave unchanged".
    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    fn apply(&self, existing: &PersonDetails) -> PersonDetails {
        PersonDetails {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| existing.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| existing.email.clone()),
            address: self
                .address
                .clone()
                .unwrap_or_else(|| existing.address.clone()),
            tags: self.tags.clone().unwrap_or_else(|| existing.tags.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientEdit {
    details: DetailsEdit,
    /// Specialty supplied on a patient-tagged edit; never applied.
    rejected_specialty: Option<Specialty>,
}

impl PatientEdit {
    pub fn rejected_specialty(&self) -> Option<&Specialty> {
        self.rejected_specialty.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialistEdit {
    details: DetailsEdit,
    specialty: Option<Specialty>,
}

impl SpecialistEdit {
    pub fn specialty(&self) -> Option<&Specialty> {
        self.specialty.as_ref()
    }
}

/// Partial update for exactly one person variant.
///
/// Built through [`EditDescriptorBuilder`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditPersonDescriptor {
    Patient(PatientEdit),
    Specialist(SpecialistEdit),
}

impl EditPersonDescriptor {
    pub fn builder() -> EditDescriptorBuilder {
        EditDescriptorBuilder::default()
    }

    pub fn person_type(&self) -> PersonType {
        match self {
            Self::Patient(_) => PersonType::Patient,
            Self::Specialist(_) => PersonType::Specialist,
        }
    }

    pub fn details(&self) -> &DetailsEdit {
        match self {
            Self::Patient(edit) => &edit.details,
            Self::Specialist(edit) => &edit.details,
        }
    }

    /// Merges this descriptor over `person`, field by field.
    ///
    /// # Errors
    /// - `CommandError::TypeMismatch` when variants differ.
    /// - `CommandError::SpecialtyOnPatient` when a patient edit carries a
    ///   specialty.
    pub fn apply_to(&self, person: &Person) -> Result<Person, CommandError> {
        match (person, self) {
            (Person::Patient(_), Self::Patient(edit)) if edit.rejected_specialty.is_some() => {
                Err(CommandError::SpecialtyOnPatient)
            }
            (Person::Patient(patient), Self::Patient(edit)) => Ok(Person::Patient(Patient {
                details: edit.details.apply(&patient.details),
            })),
            (Person::Specialist(specialist), Self::Specialist(edit)) => {
                Ok(Person::Specialist(Specialist {
                    details: edit.details.apply(&specialist.details),
                    specialty: edit
                        .specialty
                        .clone()
                        .unwrap_or_else(|| specialist.specialty.clone()),
                }))
            }
            (Person::Patient(_), Self::Specialist(_)) | (Person::Specialist(_), Self::Patient(_)) => {
                Err(CommandError::TypeMismatch {
                    declared: self.person_type(),
                    actual: person.person_type(),
                })
            }
        }
    }
}

/// Reasons a builder refuses to produce a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorError {
    /// No field was supplied.
    NotEdited,
}

impl Display for DescriptorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotEdited => write!(f, "at least one field to edit must be provided"),
        }
    }
}

impl Error for DescriptorError {}

/// Collects supplied fields, then freezes them into a descriptor.
#[derive(Debug, Clone, Default)]
pub struct EditDescriptorBuilder {
    details: DetailsEdit,
    specialty: Option<Specialty>,
}

impl EditDescriptorBuilder {
    pub fn name(mut self, name: Name) -> Self {
        self.details.name = Some(name);
        self
    }

    pub fn phone(mut self, phone: Phone) -> Self {
        self.details.phone = Some(phone);
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.details.email = Some(email);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.details.address = Some(address);
        self
    }

    /// Replaces the whole tag set; pass an empty set to clear tags.
    pub fn tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.details.tags = Some(tags);
        self
    }

    pub fn specialty(mut self, specialty: Specialty) -> Self {
        self.specialty = Some(specialty);
        self
    }

    /// Produces the descriptor variant selected by `person_type`.
    ///
    /// The variant comes from the declared type, never from which fields
    /// were supplied. A specialty given for a patient is kept so the merge
    /// step can reject it.
    pub fn build(self, person_type: PersonType) -> Result<EditPersonDescriptor, DescriptorError> {
        if !self.details.is_any_field_edited() && self.specialty.is_none() {
            return Err(DescriptorError::NotEdited);
        }

        match person_type {
            PersonType::Patient => Ok(EditPersonDescriptor::Patient(PatientEdit {
                details: self.details,
                rejected_specialty: self.specialty,
            })),
            PersonType::Specialist => Ok(EditPersonDescriptor::Specialist(SpecialistEdit {
                details: self.details,
                specialty: self.specialty,
            })),
        }
    }
}

/// Edits the person at a display index using a partial descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: DisplayIndex,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn new(index: DisplayIndex, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> DisplayIndex {
        self.index
    }

    pub fn descriptor(&self) -> &EditPersonDescriptor {
        &self.descriptor
    }

    /// Declared type of the edit; always equals the descriptor variant.
    pub fn person_type(&self) -> PersonType {
        self.descriptor.person_type()
    }

    /// Resolves, merges, checks identity, commits, then refreshes the view.
    ///
    /// Steps from resolve to commit run under one `&mut` borrow of the
    /// repository, so no other mutation can interleave.
    pub fn execute<R: PersonRepository>(&self, repo: &mut R) -> Result<CommandResult, CommandError> {
        let target = person_at(repo, self.index)?;
        let edited = self.descriptor.apply_to(&target).map_err(|err| {
            let reason = match err {
                CommandError::SpecialtyOnPatient => "specialty_on_patient",
                _ => "type_mismatch",
            };
            warn!(
                "event=person_edit module=command status=rejected reason={reason} index={}",
                self.index
            );
            err
        })?;

        if !target.is_same_person(&edited) && repo.has_person(&edited) {
            warn!(
                "event=person_edit module=command status=rejected reason=duplicate index={}",
                self.index
            );
            return Err(CommandError::DuplicatePerson);
        }

        repo.set_person(&target, edited.clone())?;
        repo.update_filtered_persons(SearchPredicate::for_type(self.person_type()));

        info!(
            "event=person_edit module=command status=ok kind={} index={}",
            self.person_type(),
            self.index
        );
        Ok(CommandResult::new(format!("Edited Person: {edited}")))
    }
}
