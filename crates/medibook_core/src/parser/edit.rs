//! Edit command parser.

use crate::command::edit::EditPersonDescriptor;
use crate::command::EditCommand;
use crate::model::fields::{Address, Email, Name, Phone, Specialty};
use crate::model::person::PersonType;
use crate::parser::field::{parse_index, parse_optional_tags};
use crate::parser::tokenizer::{
    tokenize, ALL_PREFIXES, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_SPECIALTY, PREFIX_TAG, SINGLE_VALUE_PREFIXES,
};
use crate::parser::ParseError;

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the person identified by the index \
number used in the displayed person list. Existing values will be overwritten by the input values.
Parameters: -pa|-sp INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
[t/TAG]... [s/SPECIALTY (specialists only)]
Example: edit -pa 1 p/91234567 e/johndoe@example.com";

/// Parses `INDEX [prefix/value]...` for an edit of `person_type`.
///
/// Every field the user supplied is validated here; the descriptor variant
/// is taken from `person_type`.
pub fn parse_edit(person_type: PersonType, args: &str) -> Result<EditCommand, ParseError> {
    let arguments = tokenize(args, ALL_PREFIXES);
    if arguments.preamble().is_empty() {
        return Err(ParseError::InvalidFormat {
            usage: MESSAGE_USAGE,
        });
    }
    let index = parse_index(arguments.preamble())?;
    arguments.verify_no_duplicate_prefixes_for(SINGLE_VALUE_PREFIXES)?;

    let mut builder = EditPersonDescriptor::builder();
    if let Some(raw) = arguments.value(PREFIX_NAME) {
        builder = builder.name(Name::parse(raw)?);
    }
    if let Some(raw) = arguments.value(PREFIX_PHONE) {
        builder = builder.phone(Phone::parse(raw)?);
    }
    if let Some(raw) = arguments.value(PREFIX_EMAIL) {
        builder = builder.email(Email::parse(raw)?);
    }
    if let Some(raw) = arguments.value(PREFIX_ADDRESS) {
        builder = builder.address(Address::parse(raw)?);
    }
    if let Some(tags) = parse_optional_tags(arguments.all_values(PREFIX_TAG))? {
        builder = builder.tags(tags);
    }
    if let Some(raw) = arguments.value(PREFIX_SPECIALTY) {
        builder = builder.specialty(Specialty::parse(raw)?);
    }

    let descriptor = builder.build(person_type)?;
    Ok(EditCommand::new(index, descriptor))
}

#[cfg(test)]
mod tests {
    use super::parse_edit;
    use crate::model::fields::FieldKind;
    use crate::model::person::PersonType;
    use crate::parser::ParseError;

    #[test]
    fn missing_index_is_invalid_format() {
        let err = parse_edit(PersonType::Patient, " p/91234567").expect_err("no index");
        assert!(matches!(err, ParseError::InvalidFormat { .. }));
    }

    #[test]
    fn field_errors_name_the_field() {
        let err = parse_edit(PersonType::Patient, " 1 e/not-an-email").expect_err("bad email");
        match err {
            ParseError::Field(field) => assert_eq!(field.field, FieldKind::Email),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn repeated_tags_are_allowed_but_repeated_phone_is_not() {
        assert!(parse_edit(PersonType::Patient, " 1 t/a t/b").is_ok());
        assert_eq!(
            parse_edit(PersonType::Patient, " 1 p/111 p/222"),
            Err(ParseError::DuplicatePrefixes(vec!["p/"]))
        );
    }
}
