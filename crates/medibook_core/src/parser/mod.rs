//! Command-line parsing into executable commands.
//!
//! # Responsibility
//! - Split user input into command word, person type tag and arguments.
//! - Validate every field before a command value exists.
//!
//! # Invariants
//! - Parsing never touches the repository.
//! - Any returned `Command` holds only validated values.
//!
//! # See also
//! - `command` for execution semantics.

pub mod field;
pub mod tokenizer;

mod add;
mod edit;
mod find;

use crate::command::edit::DescriptorError;
use crate::command::{
    add as add_command, delete as delete_command, edit as edit_command, find as find_command,
    list as list_command, Command, DeleteCommand, ListCommand,
};
use crate::model::fields::FieldValidationError;
use crate::model::person::PersonType;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use add::parse_add;
pub use edit::parse_edit;
pub use find::parse_find;

/// Malformed command structure or invalid field input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was blank.
    EmptyInput,
    /// Command word is not recognised.
    UnknownCommand(String),
    /// Structure does not match the command's usage.
    InvalidFormat { usage: &'static str },
    /// Person type tag missing or not `-pa` / `-sp`.
    UnknownPersonType(String),
    /// Index is not a positive integer.
    InvalidIndex(String),
    /// Single-value prefixes given more than once.
    DuplicatePrefixes(Vec<&'static str>),
    /// Required prefixes absent.
    MissingPrefixes(Vec<&'static str>),
    /// An edit supplied no field to change.
    NotEdited,
    /// `add` supplied a specialty for a patient.
    SpecialtyOnPatient,
    /// One field value failed validation.
    Field(FieldValidationError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "no command entered"),
            Self::UnknownCommand(word) => write!(f, "unknown command: `{word}`"),
            Self::InvalidFormat { usage } => write!(f, "invalid command format!\n{usage}"),
            Self::UnknownPersonType(value) => write!(
                f,
                "unknown person type `{value}`; expected -pa (patient) or -sp (specialist)"
            ),
            Self::InvalidIndex(value) => {
                write!(f, "index must be a positive integer, got `{value}`")
            }
            Self::DuplicatePrefixes(prefixes) => write!(
                f,
                "multiple values specified for the following single-valued field(s): {}",
                prefixes.join(" ")
            ),
            Self::MissingPrefixes(prefixes) => {
                write!(f, "missing required field(s): {}", prefixes.join(" "))
            }
            Self::NotEdited => write!(f, "{}", DescriptorError::NotEdited),
            Self::SpecialtyOnPatient => write!(f, "patients do not have a specialty"),
            Self::Field(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FieldValidationError> for ParseError {
    fn from(value: FieldValidationError) -> Self {
        Self::Field(value)
    }
}

impl From<DescriptorError> for ParseError {
    fn from(value: DescriptorError) -> Self {
        match value {
            DescriptorError::NotEdited => Self::NotEdited,
        }
    }
}

/// Parses one line of user input into a command.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (word, rest) = split_first_word(trimmed);
    match word {
        add_command::COMMAND_WORD => {
            let (person_type, args) = parse_person_type(rest)?;
            parse_add(person_type, args).map(Command::Add)
        }
        edit_command::COMMAND_WORD => {
            let (person_type, args) = parse_person_type(rest)?;
            parse_edit(person_type, args).map(Command::Edit)
        }
        find_command::COMMAND_WORD => {
            let (person_type, args) = parse_person_type(rest)?;
            parse_find(person_type, args).map(Command::Find)
        }
        list_command::COMMAND_WORD => parse_list(rest).map(Command::List),
        delete_command::COMMAND_WORD => {
            let index = field::parse_index(rest)?;
            Ok(Command::Delete(DeleteCommand { index }))
        }
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn split_first_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (input, ""),
    }
}

/// Consumes the leading `-pa` / `-sp` tag and returns the remaining args.
fn parse_person_type(args: &str) -> Result<(PersonType, &str), ParseError> {
    let (tag, rest) = split_first_word(args.trim_start());
    PersonType::from_tag(tag)
        .map(|person_type| (person_type, rest))
        .ok_or_else(|| ParseError::UnknownPersonType(tag.to_string()))
}

fn parse_list(args: &str) -> Result<ListCommand, ParseError> {
    let tag = args.trim();
    if tag.is_empty() {
        return Ok(ListCommand { person_type: None });
    }
    PersonType::from_tag(tag)
        .map(|person_type| ListCommand {
            person_type: Some(person_type),
        })
        .ok_or_else(|| ParseError::UnknownPersonType(tag.to_string()))
}
