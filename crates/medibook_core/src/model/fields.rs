//! Validated field value types shared by patients and specialists.
//!
//! # Responsibility
//! - Wrap raw user input into immutable, validated values.
//! - Report the offending field and raw input on rejection.
//!
//! # Invariants
//! - Every constructed value already satisfies its format rule.
//! - Surrounding whitespace is trimmed before validation.
//! - Equality is structural over the trimmed text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]{2,}(?:-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S.*$").expect("valid address regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));

/// Identifies which field a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    Specialty,
    Tag,
}

impl FieldKind {
    /// Lowercase field label used in user-facing messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Specialty => "specialty",
            Self::Tag => "tag",
        }
    }

    /// Format rule shown to the user when validation fails.
    pub fn constraints(self) -> &'static str {
        match self {
            Self::Name => {
                "Names should only contain alphanumeric characters and spaces, and it should not be blank"
            }
            Self::Phone => "Phone numbers should only contain numbers, and it should be at least 3 digits long",
            Self::Email => {
                "Emails should be of the format local-part@domain. The local-part should only contain \
                 alphanumeric characters separated by one of +_.- and the domain should be made of \
                 labels separated by periods, ending with a label at least 2 characters long"
            }
            Self::Address => "Addresses can take any values, and it should not be blank",
            Self::Specialty => {
                "Specialties should only contain alphanumeric characters and spaces, and it should not be blank"
            }
            Self::Tag => "Tag names should be alphanumeric",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single raw field value failed its format rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    pub field: FieldKind,
    pub value: String,
}

impl FieldValidationError {
    fn new(field: FieldKind, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

impl Display for FieldValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} `{}`: {}",
            self.field,
            self.value,
            self.field.constraints()
        )
    }
}

impl Error for FieldValidationError {}

fn validate(field: FieldKind, pattern: &Regex, raw: &str) -> Result<String, FieldValidationError> {
    let trimmed = raw.trim();
    if pattern.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(FieldValidationError::new(field, raw))
    }
}

macro_rules! field_value {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $pattern:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validates `raw` and wraps the trimmed value.
            pub fn parse(raw: &str) -> Result<Self, FieldValidationError> {
                validate($kind, &$pattern, raw).map(Self)
            }

            /// Returns whether `raw` would be accepted by [`Self::parse`].
            pub fn is_valid(raw: &str) -> bool {
                $pattern.is_match(raw.trim())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = FieldValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

field_value!(
    /// Person name: alphanumerics and spaces, never blank.
    Name,
    FieldKind::Name,
    NAME_RE
);
field_value!(
    /// Phone number: at least three digits, nothing else.
    Phone,
    FieldKind::Phone,
    PHONE_RE
);
field_value!(
    /// Email address in `local@domain` shape.
    Email,
    FieldKind::Email,
    EMAIL_RE
);
field_value!(
    /// Free-form postal address.
    Address,
    FieldKind::Address,
    ADDRESS_RE
);
field_value!(
    /// Medical specialty of a specialist.
    Specialty,
    FieldKind::Specialty,
    NAME_RE
);
field_value!(
    /// Single alphanumeric label. Case is preserved.
    Tag,
    FieldKind::Tag,
    TAG_RE
);

#[cfg(test)]
mod tests {
    use super::{Address, Email, FieldKind, Name, Phone, Specialty, Tag};

    #[test]
    fn name_trims_and_rejects_symbols() {
        assert_eq!(Name::parse("  Alice Tan ").expect("name").as_str(), "Alice Tan");
        let err = Name::parse("Alice*").expect_err("symbols must fail");
        assert_eq!(err.field, FieldKind::Name);
        assert_eq!(err.value, "Alice*");
        assert!(Name::parse("   ").is_err());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("911").is_ok());
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9123 4567").is_err());
        assert!(Phone::parse("phone").is_err());
    }

    #[test]
    fn email_accepts_common_shapes() {
        for valid in [
            "johndoe@example.com",
            "a+b@x-y.sg",
            "first.last@mail.example.org",
        ] {
            assert!(Email::is_valid(valid), "expected valid email: {valid}");
        }
        for invalid in ["plain", "@example.com", "a@b", "a..b@example.com", "-a@example.com"] {
            assert!(!Email::is_valid(invalid), "expected invalid email: {invalid}");
        }
    }

    #[test]
    fn address_must_not_be_blank() {
        assert!(Address::parse("Blk 30 Geylang Street 29, #06-40").is_ok());
        assert!(Address::parse("  ").is_err());
    }

    #[test]
    fn specialty_and_tag_rules() {
        assert!(Specialty::parse("Cardiology").is_ok());
        assert!(Specialty::parse("").is_err());
        assert!(Tag::parse("urgent").is_ok());
        assert!(Tag::parse("very urgent").is_err());
        assert_ne!(Tag::parse("Urgent").unwrap(), Tag::parse("urgent").unwrap());
    }

    #[test]
    fn alphanumeric_rules_are_ascii_only() {
        assert!(Name::parse("Zoe 2").is_ok());
        assert!(Name::parse("Zoë").is_err());
        assert!(Specialty::parse("Pädiatrie").is_err());
        assert!(Tag::parse("café").is_err());
        assert!(Phone::parse("١٢٣").is_err());
    }

    #[test]
    fn error_message_names_field_and_constraint() {
        let err = Phone::parse("abc").expect_err("must fail");
        let message = err.to_string();
        assert!(message.contains("phone"));
        assert!(message.contains("abc"));
        assert!(message.contains("at least 3 digits"));
    }
}
