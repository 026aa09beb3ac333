//! Find command parser and predicate composition.

use crate::command::FindCommand;
use crate::model::fields::{Address, Email, Phone, Specialty};
use crate::model::person::PersonType;
use crate::parser::field::parse_optional_tags;
use crate::parser::tokenizer::{
    tokenize, ALL_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_SPECIALTY, PREFIX_TAG, SINGLE_VALUE_PREFIXES,
};
use crate::parser::ParseError;
use crate::search::predicate::FieldClause;
use log::debug;

pub const MESSAGE_USAGE: &str = "find: Finds all persons of the given type whose fields match \
every supplied filter. Name keywords match whole words, case-insensitive.
Parameters: -pa|-sp [n/KEYWORD [MORE_KEYWORDS]...] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]... \
[s/SPECIALTY]
Example: find -sp s/Oncology t/urgent";

/// Builds a find command for `person_type` from raw arguments.
pub fn parse_find(person_type: PersonType, args: &str) -> Result<FindCommand, ParseError> {
    match person_type {
        PersonType::Patient => Ok(parse_patient_find(args)),
        PersonType::Specialist => parse_specialist_find(args),
    }
}

/// Patient filtering is not supported yet: the result is always the
/// default patient listing and any filter text is ignored.
fn parse_patient_find(args: &str) -> FindCommand {
    if !args.trim().is_empty() {
        debug!("event=find_parse module=parser status=ignored kind=patient reason=unsupported_filters");
    }
    FindCommand::new(PersonType::Patient, Vec::new())
}

fn parse_specialist_find(args: &str) -> Result<FindCommand, ParseError> {
    let arguments = tokenize(args, ALL_PREFIXES);
    arguments.verify_no_duplicate_prefixes_for(SINGLE_VALUE_PREFIXES)?;

    let mut clauses = Vec::new();
    if let Some(raw) = arguments.value(PREFIX_NAME) {
        let keywords: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(ParseError::InvalidFormat {
                usage: MESSAGE_USAGE,
            });
        }
        clauses.push(FieldClause::NameKeywords(keywords));
    }
    if let Some(raw) = arguments.value(PREFIX_PHONE) {
        clauses.push(FieldClause::Phone(Phone::parse(raw)?));
    }
    if let Some(raw) = arguments.value(PREFIX_EMAIL) {
        clauses.push(FieldClause::Email(Email::parse(raw)?));
    }
    if let Some(raw) = arguments.value(PREFIX_ADDRESS) {
        clauses.push(FieldClause::Address(Address::parse(raw)?));
    }
    if let Some(raw) = arguments.value(PREFIX_SPECIALTY) {
        clauses.push(FieldClause::Specialty(Specialty::parse(raw)?));
    }
    if let Some(tags) = parse_optional_tags(arguments.all_values(PREFIX_TAG))? {
        clauses.push(FieldClause::Tags(tags));
    }

    Ok(FindCommand::new(PersonType::Specialist, clauses))
}
