//! Substring and regular expression checks against the textual form of a value.

use refova_model::{RefovaError, Result};
use regex::Regex;

use crate::rule::{Message, Rule};

pub fn contains<I: ?Sized>(needle: impl Into<String>, message: impl Into<Message<I>>) -> Rule<I> {
    let needle = needle.into();
    Rule::new(
        move |value, _| value.to_string().contains(needle.as_str()),
        message,
    )
}

/// Passes when the pattern matches anywhere in the value; anchor it for a full match.
///
/// # Errors
///
/// Returns [`RefovaError::InvalidPattern`] if `pattern` does not compile.
pub fn matches<I: ?Sized>(pattern: &str, message: impl Into<Message<I>>) -> Result<Rule<I>> {
    let regex = Regex::new(pattern).map_err(|error| RefovaError::InvalidPattern {
        pattern: pattern.to_string(),
        message: error.to_string(),
    })?;
    Ok(Rule::new(
        move |value, _| regex.is_match(&value.to_string()),
        message,
    ))
}
