//! Shared argument parsing helpers.

use crate::command::DisplayIndex;
use crate::model::fields::Tag;
use crate::parser::ParseError;
use std::collections::BTreeSet;

/// Parses a 1-based display index from trimmed input.
pub fn parse_index(raw: &str) -> Result<DisplayIndex, ParseError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(DisplayIndex::from_one_based)
        .ok_or_else(|| ParseError::InvalidIndex(trimmed.to_string()))
}

/// Parses every raw tag value into a set.
pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values
        .iter()
        .map(|value| Tag::parse(value).map_err(ParseError::from))
        .collect()
}

/// Parses tag values where absence and explicit clearing differ.
///
/// - no values: `None` (tags not mentioned)
/// - exactly one empty value: `Some(empty)` (clear all tags)
/// - otherwise: every value must be a valid tag
pub fn parse_optional_tags(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}
