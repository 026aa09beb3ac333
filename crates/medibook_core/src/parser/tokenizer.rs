//! Prefix-tagged argument tokenizer.
//!
//! # Responsibility
//! - Split an argument string into a preamble and prefix → values map.
//!
//! # Invariants
//! - A prefix only counts at the start of input or right after whitespace.
//! - Values extend to the next recognised prefix and are trimmed.
//! - Repeated prefixes keep every value in input order.

use crate::parser::ParseError;
use std::collections::HashMap;

/// Field marker such as `n/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(value: &'static str) -> Self {
        Self(value)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_SPECIALTY: Prefix = Prefix::new("s/");

/// Every prefix the command grammar recognises.
pub const ALL_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_TAG,
    PREFIX_SPECIALTY,
];

/// Prefixes that may appear at most once per command.
pub const SINGLE_VALUE_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_SPECIALTY,
];

/// Tokenized arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// All values given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Fails when any of `prefixes` occurs more than once.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.as_str())
            .collect::<Vec<_>>();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated))
        }
    }
}

/// Tokenizes `args` against the recognised `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions = prefixes
        .iter()
        .flat_map(|prefix| prefix_positions(args, *prefix))
        .collect::<Vec<_>>();
    positions.sort_by_key(|(position, _)| *position);

    let preamble_end = positions.first().map_or(args.len(), |(position, _)| *position);
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (slot, (position, prefix)) in positions.iter().enumerate() {
        let value_start = position + prefix.as_str().len();
        let value_end = positions
            .get(slot + 1)
            .map_or(args.len(), |(next, _)| *next);
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn prefix_positions(args: &str, prefix: Prefix) -> Vec<(usize, Prefix)> {
    args.match_indices(prefix.as_str())
        .filter(|(position, _)| {
            args[..*position]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace)
        })
        .map(|(position, _)| (position, prefix))
        .collect()
}
