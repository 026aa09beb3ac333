//! Core domain logic for MediBook, a patient and specialist contact book.
//! This crate is the single source of truth for command and record invariants.

pub mod command;
pub mod logging;
pub mod model;
pub mod parser;
pub mod repo;
pub mod search;
pub mod service;

pub use command::edit::{
    DescriptorError, DetailsEdit, EditDescriptorBuilder, PatientEdit, SpecialistEdit,
};
pub use command::{
    AddCommand, Command, CommandError, CommandResult, DeleteCommand, DisplayIndex, EditCommand,
    EditPersonDescriptor, FindCommand, ListCommand,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::fields::{
    Address, Email, FieldKind, FieldValidationError, Name, Phone, Specialty, Tag,
};
pub use model::person::{Patient, Person, PersonDetails, PersonType, Specialist};
pub use parser::{parse_command, ParseError};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository, RepoError, RepoResult};
pub use repo::seed::{repository_from_json, SeedError};
pub use search::predicate::{FieldClause, SearchPredicate};
pub use service::command_service::{CommandService, CommandServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
