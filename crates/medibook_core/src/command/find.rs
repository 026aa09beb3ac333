//! Find command: installs a composed search predicate as the active view.

use crate::command::CommandResult;
use crate::model::person::PersonType;
use crate::repo::person_repo::PersonRepository;
use crate::search::predicate::{FieldClause, SearchPredicate};
use log::info;

pub const COMMAND_WORD: &str = "find";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    person_type: PersonType,
    predicate: SearchPredicate,
}

impl FindCommand {
    /// ANDs `clauses` under the `person_type` discriminator, so records of
    /// the other variant never match.
    pub fn new(person_type: PersonType, clauses: Vec<FieldClause>) -> Self {
        let predicate = clauses
            .into_iter()
            .fold(SearchPredicate::for_type(person_type), SearchPredicate::and);
        Self {
            person_type,
            predicate,
        }
    }

    pub fn person_type(&self) -> PersonType {
        self.person_type
    }

    pub fn predicate(&self) -> &SearchPredicate {
        &self.predicate
    }

    pub fn execute<R: PersonRepository>(&self, repo: &mut R) -> CommandResult {
        repo.update_filtered_persons(self.predicate.clone());
        let listed = repo.filtered_persons().len();
        info!(
            "event=person_find module=command status=ok kind={} clauses={} listed={}",
            self.person_type,
            self.predicate.clauses().len(),
            listed
        );
        CommandResult::new(format!("{listed} persons listed!"))
    }
}
