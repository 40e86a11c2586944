//! Extraction of (key, value) pairs from input-like change targets.

use refova_model::{FieldValue, RefovaError, Result};
use serde::{Deserialize, Serialize};

/// Anything a host can report a field change from.
pub trait FieldTarget {
    fn name(&self) -> Option<&str>;
    fn id(&self) -> Option<&str>;
    fn is_checkbox(&self) -> bool;
    fn value(&self) -> &str;
    fn checked(&self) -> bool;
}

/// Key of the target: its name, falling back to its id.
pub fn field_key<T: FieldTarget + ?Sized>(target: &T) -> Option<&str> {
    target
        .name()
        .filter(|name| !name.is_empty())
        .or_else(|| target.id().filter(|id| !id.is_empty()))
}

/// Value of the target: the checked state for checkboxes, the text otherwise.
pub fn field_value<T: FieldTarget + ?Sized>(target: &T) -> FieldValue {
    if target.is_checkbox() {
        FieldValue::flag(target.checked())
    } else {
        FieldValue::text(target.value())
    }
}

pub fn field_entry<T: FieldTarget + ?Sized>(target: &T) -> Result<(String, FieldValue)> {
    let key = field_key(target).ok_or(RefovaError::MissingFieldKey)?;
    Ok((key.to_string(), field_value(target)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Checkbox,
}

/// Plain description of an input element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputElement {
    pub name: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub value: String,
    pub checked: bool,
}

impl InputElement {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: Some(name.into()),
            kind: InputKind::Checkbox,
            checked,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl FieldTarget for InputElement {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn is_checkbox(&self) -> bool {
        self.kind == InputKind::Checkbox
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn checked(&self) -> bool {
        self.checked
    }
}
