//! Add command: stores one new patient or specialist.

use crate::command::{CommandError, CommandResult};
use crate::model::person::Person;
use crate::repo::person_repo::PersonRepository;
use log::{info, warn};

pub const COMMAND_WORD: &str = "add";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    pub person: Person,
}

impl AddCommand {
    pub fn execute<R: PersonRepository>(&self, repo: &mut R) -> Result<CommandResult, CommandError> {
        if repo.has_person(&self.person) {
            warn!("event=person_add module=command status=rejected reason=duplicate");
            return Err(CommandError::DuplicatePerson);
        }

        repo.add_person(self.person.clone())?;
        info!(
            "event=person_add module=command status=ok kind={}",
            self.person.person_type()
        );
        Ok(CommandResult::new(format!(
            "New person added: {}",
            self.person
        )))
    }
}
