//! One-or-many field key arguments.

use serde::{Deserialize, Serialize};

/// A list of field keys accepted by operations that take "one key or many".
///
/// Converts from a single key as well as from arrays, slices and vectors, so
/// `reset_error("email")` and `reset_error(["email", "password"])` both work.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct FieldKeys(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for FieldKeys {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(key) => Self(vec![key]),
            OneOrMany::Many(keys) => Self(keys),
        }
    }
}

impl FieldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for FieldKeys {
    fn from(key: &str) -> Self {
        Self(vec![key.to_string()])
    }
}

impl From<String> for FieldKeys {
    fn from(key: String) -> Self {
        Self(vec![key])
    }
}

impl From<&String> for FieldKeys {
    fn from(key: &String) -> Self {
        Self(vec![key.clone()])
    }
}

impl From<Vec<String>> for FieldKeys {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl From<Vec<&str>> for FieldKeys {
    fn from(keys: Vec<&str>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<&[&str]> for FieldKeys {
    fn from(keys: &[&str]) -> Self {
        keys.iter().copied().collect()
    }
}

impl From<&[String]> for FieldKeys {
    fn from(keys: &[String]) -> Self {
        Self(keys.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for FieldKeys {
    fn from(keys: [&str; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a> FromIterator<&'a str> for FieldKeys {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl FromIterator<String> for FieldKeys {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FieldKeys {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
