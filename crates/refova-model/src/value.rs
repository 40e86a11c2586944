//! Field values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The current value of a single form field.
///
/// Text inputs carry their string content, checkboxes carry their checked
/// state. Serialized untagged, so JSON `"abc"` and `true` map directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn flag(value: bool) -> Self {
        Self::Flag(value)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// True for empty (or whitespace-only) text. Flags are never blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Flag(_) => false,
        }
    }

    /// Length in characters of the textual form.
    pub fn char_len(&self) -> usize {
        match self {
            Self::Text(value) => value.chars().count(),
            Self::Flag(value) => if *value { 4 } else { 5 },
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_char_len() {
        for value in [FieldValue::flag(true), FieldValue::flag(false), "héllo".into()] {
            assert_eq!(value.to_string().chars().count(), value.char_len());
        }
    }

    #[test]
    fn blank_detection() {
        assert!(FieldValue::default().is_blank());
        assert!(FieldValue::text("  ").is_blank());
        assert!(!FieldValue::text("a").is_blank());
        assert!(!FieldValue::flag(false).is_blank());
    }
}
