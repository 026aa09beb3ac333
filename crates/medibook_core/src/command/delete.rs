//! Delete command: removes the person at a display index.

use crate::command::{person_at, CommandError, CommandResult, DisplayIndex};
use crate::repo::person_repo::PersonRepository;
use log::info;

pub const COMMAND_WORD: &str = "delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    pub index: DisplayIndex,
}

impl DeleteCommand {
    pub fn execute<R: PersonRepository>(&self, repo: &mut R) -> Result<CommandResult, CommandError> {
        let target = person_at(repo, self.index)?;
        repo.delete_person(&target)?;
        info!(
            "event=person_delete module=command status=ok kind={} index={}",
            target.person_type(),
            self.index
        );
        Ok(CommandResult::new(format!("Deleted Person: {target}")))
    }
}
