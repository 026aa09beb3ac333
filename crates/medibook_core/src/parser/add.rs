//! Add command parser.

use crate::command::AddCommand;
use crate::model::fields::{Address, Email, Name, Phone, Specialty};
use crate::model::person::{Person, PersonDetails, PersonType};
use crate::parser::field::parse_tags;
use crate::parser::tokenizer::{
    tokenize, Prefix, ALL_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_SPECIALTY, PREFIX_TAG, SINGLE_VALUE_PREFIXES,
};
use crate::parser::ParseError;

pub const MESSAGE_USAGE: &str = "add: Adds a person to the contact book.
Parameters: -pa|-sp n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]... [s/SPECIALTY (specialists only, required)]
Example: add -sp n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 s/Cardiology";

pub fn parse_add(person_type: PersonType, args: &str) -> Result<AddCommand, ParseError> {
    let arguments = tokenize(args, ALL_PREFIXES);
    if !arguments.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }

    let mut required = vec![PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    match person_type {
        PersonType::Specialist => required.push(PREFIX_SPECIALTY),
        PersonType::Patient if arguments.contains(PREFIX_SPECIALTY) => {
            return Err(ParseError::SpecialtyOnPatient);
        }
        PersonType::Patient => {}
    }
    let missing = required
        .iter()
        .filter(|prefix| !arguments.contains(**prefix))
        .map(|prefix| prefix.as_str())
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ParseError::MissingPrefixes(missing));
    }
    arguments.verify_no_duplicate_prefixes_for(SINGLE_VALUE_PREFIXES)?;

    let required_value = |prefix: Prefix| arguments.value(prefix).unwrap_or_default();
    let details = PersonDetails::new(
        Name::parse(required_value(PREFIX_NAME))?,
        Phone::parse(required_value(PREFIX_PHONE))?,
        Email::parse(required_value(PREFIX_EMAIL))?,
        Address::parse(required_value(PREFIX_ADDRESS))?,
        parse_tags(arguments.all_values(PREFIX_TAG))?,
    );

    let person = match person_type {
        PersonType::Patient => Person::patient(details),
        PersonType::Specialist => Person::specialist(
            details,
            Specialty::parse(required_value(PREFIX_SPECIALTY))?,
        ),
    };
    Ok(AddCommand { person })
}
