//! Executable contact book commands.
//!
//! # Responsibility
//! - Carry fully parsed, validated command values.
//! - Apply them to a repository handle passed in per invocation.
//!
//! # Invariants
//! - Every command either commits all of its changes or none of them.
//! - Commands re-read the filtered view on each execution; no record
//!   reference survives across invocations.

pub mod add;
pub mod delete;
pub mod edit;
pub mod find;
pub mod list;

use crate::model::person::{Person, PersonType};
use crate::repo::person_repo::{PersonRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPersonDescriptor};
pub use find::FindCommand;
pub use list::ListCommand;

/// Usage summary printed by `help`.
pub const HELP_MESSAGE: &str = "Commands:
  add -pa|-sp n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]... [s/SPECIALTY]
  edit -pa|-sp INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]... [s/SPECIALTY]
  find -pa|-sp [n/KEYWORDS] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]... [s/SPECIALTY]
  list [-pa|-sp]
  delete INDEX
  help
  exit";

/// 1-based position in the currently displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Returns `None` for zero.
    pub fn from_one_based(value: usize) -> Option<Self> {
        value.checked_sub(1).map(Self)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl Display for DisplayIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

/// Outcome shown to the user after a command succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// Execution failures. The store is unchanged whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Index is outside the filtered view.
    InvalidIndex {
        index: DisplayIndex,
        visible: usize,
    },
    /// Descriptor variant disagrees with the record at the index.
    TypeMismatch {
        declared: PersonType,
        actual: PersonType,
    },
    /// A patient edit supplied a specialty.
    SpecialtyOnPatient,
    /// Result would collide with a different stored person.
    DuplicatePerson,
    /// Repository rejected the mutation.
    Repo(RepoError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex { index, visible } => write!(
                f,
                "the person index provided is invalid: {index} (displayed list has {visible})"
            ),
            Self::TypeMismatch { declared, actual } => write!(
                f,
                "the person at this index is a {actual}, not a {declared}"
            ),
            Self::SpecialtyOnPatient => write!(f, "patients do not have a specialty to edit"),
            Self::DuplicatePerson => write!(f, "this person already exists in the contact book"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CommandError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DuplicatePerson => Self::DuplicatePerson,
            other => Self::Repo(other),
        }
    }
}

/// Parsed command ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Find(FindCommand),
    List(ListCommand),
    Delete(DeleteCommand),
    Help,
    Exit,
}

impl Command {
    /// Stable command word used in logs.
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => add::COMMAND_WORD,
            Self::Edit(_) => edit::COMMAND_WORD,
            Self::Find(_) => find::COMMAND_WORD,
            Self::List(_) => list::COMMAND_WORD,
            Self::Delete(_) => delete::COMMAND_WORD,
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub fn execute<R: PersonRepository>(&self, repo: &mut R) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(command) => command.execute(repo),
            Self::Edit(command) => command.execute(repo),
            Self::Find(command) => Ok(command.execute(repo)),
            Self::List(command) => Ok(command.execute(repo)),
            Self::Delete(command) => command.execute(repo),
            Self::Help => Ok(CommandResult::new(HELP_MESSAGE)),
            Self::Exit => Ok(CommandResult::exit("Exiting contact book as requested ...")),
        }
    }
}

/// Resolves `index` against the filtered view and clones the record there.
pub(crate) fn person_at<R: PersonRepository>(
    repo: &R,
    index: DisplayIndex,
) -> Result<Person, CommandError> {
    let visible = repo.filtered_persons();
    visible
        .get(index.zero_based())
        .map(|person| (*person).clone())
        .ok_or(CommandError::InvalidIndex {
            index,
            visible: visible.len(),
        })
}
