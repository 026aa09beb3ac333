//! List command: resets the view to a type's default listing.

use crate::command::CommandResult;
use crate::model::person::PersonType;
use crate::repo::person_repo::PersonRepository;
use crate::search::predicate::SearchPredicate;
use log::debug;

pub const COMMAND_WORD: &str = "list";
pub const MESSAGE_SUCCESS: &str = "Listed all persons";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand {
    /// `None` lists every record.
    pub person_type: Option<PersonType>,
}

impl ListCommand {
    pub fn execute<R: PersonRepository>(&self, repo: &mut R) -> CommandResult {
        let predicate = match self.person_type {
            Some(kind) => SearchPredicate::for_type(kind),
            None => SearchPredicate::show_all(),
        };
        repo.update_filtered_persons(predicate);
        debug!(
            "event=person_list module=command status=ok listed={}",
            repo.filtered_persons().len()
        );

        CommandResult::new(MESSAGE_SUCCESS)
    }
}
