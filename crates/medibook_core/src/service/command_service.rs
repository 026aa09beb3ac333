//! Command use-case service.
//!
//! # Responsibility
//! - Provide the single entry point that turns a typed line into a result.
//! - Own the repository handle and pass it to each command explicitly.
//!
//! # Invariants
//! - One command is parsed and fully executed before the next is accepted;
//!   `execute` takes `&mut self`, so callers cannot interleave mutations.
//! - Failed commands leave the repository unchanged.

use crate::command::{CommandError, CommandResult};
use crate::parser::{parse_command, ParseError};
use crate::repo::person_repo::PersonRepository;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for command use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandServiceError {
    /// Input could not be turned into a command.
    Parse(ParseError),
    /// Command was valid but could not be applied.
    Execute(CommandError),
}

impl Display for CommandServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Execute(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Execute(err) => Some(err),
        }
    }
}

impl From<ParseError> for CommandServiceError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<CommandError> for CommandServiceError {
    fn from(value: CommandError) -> Self {
        Self::Execute(value)
    }
}

/// Command service facade over repository implementations.
pub struct CommandService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> CommandService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Parses and executes one line of user input.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, CommandServiceError> {
        let command = parse_command(input).map_err(|err| {
            debug!("event=command_parse module=service status=error");
            CommandServiceError::from(err)
        })?;

        let word = command.word();
        match command.execute(&mut self.repo) {
            Ok(result) => {
                info!(
                    "event=command_execute module=service status=ok command={} visible={}",
                    word,
                    self.repo.filtered_persons().len()
                );
                Ok(result)
            }
            Err(err) => {
                warn!(
                    "event=command_execute module=service status=error command={}",
                    word
                );
                Err(err.into())
            }
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }
}
