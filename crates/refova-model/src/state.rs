//! The values/errors/changed triple owned by a form.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Current field values keyed by field identifier, in insertion order.
pub type Values = IndexMap<String, FieldValue>;

/// Current validation failure messages keyed by field identifier.
///
/// A present key always denotes a current failure. An absent key only means
/// no failure is known.
pub type Errors = IndexMap<String, String>;

/// Field keys modified since the last full reset, in first-modified order.
pub type Changed = Vec<String>;

/// Snapshot of a form's state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub values: Values,
    pub errors: Errors,
    pub changed: Changed,
}

impl FormState {
    pub fn new(values: Values) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// True when no field currently has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    pub fn value(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn is_changed(&self, key: &str) -> bool {
        self.changed.iter().any(|changed| changed == key)
    }
}
