//! Scenario files replayed by `refova run`.
//!
//! A scenario is a JSON document with the external input, the mapping from
//! form fields into that input, form options, declarative rules and the
//! operations to replay.

use std::path::Path;

use indexmap::IndexMap;
use refova_core::InputElement;
use refova_model::{FieldKeys, FieldValue, FormOptions, Result, Values};
use refova_validate::{RulesConfig, check_references};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// External input the form is derived from.
    #[serde(default)]
    pub input: Value,
    /// Field key to JSON pointer (or top-level key) into the input.
    pub fields: IndexMap<String, String>,
    #[serde(default)]
    pub options: FormOptions,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One operation replayed against the form.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    SetValue {
        key: String,
        value: FieldValue,
        #[serde(default = "default_validate")]
        validate: bool,
    },
    SetValues {
        values: Values,
        #[serde(default = "default_validate")]
        validate: bool,
    },
    ResetError {
        keys: FieldKeys,
    },
    Validate,
    ValidateValue {
        keys: FieldKeys,
    },
    Reset,
    /// Deliver a new external input.
    Input {
        input: Value,
    },
    Change {
        target: InputElement,
    },
    OnlyChange {
        target: InputElement,
    },
}

fn default_validate() -> bool {
    true
}

impl Step {
    /// Operation name as written in scenario files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetValue { .. } => "set_value",
            Self::SetValues { .. } => "set_values",
            Self::ResetError { .. } => "reset_error",
            Self::Validate => "validate",
            Self::ValidateValue { .. } => "validate_value",
            Self::Reset => "reset",
            Self::Input { .. } => "input",
            Self::Change { .. } => "change",
            Self::OnlyChange { .. } => "only_change",
        }
    }
}

impl Scenario {
    /// Parse a scenario from JSON text and check its rule references.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a `same_as` rule refers
    /// to a field that is not mapped.
    pub fn from_json(text: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(text)?;
        check_references(&scenario.rules, |field| scenario.fields.contains_key(field))?;
        Ok(scenario)
    }

    /// Read and parse a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Map an input to form values, one entry per configured field.
    pub fn map_input(&self, input: &Value) -> Values {
        map_fields(&self.fields, input)
    }
}

/// Look up every field in `input` and convert it to a form value.
pub fn map_fields(fields: &IndexMap<String, String>, input: &Value) -> Values {
    fields
        .iter()
        .map(|(key, path)| (key.clone(), json_to_field_value(lookup(input, path))))
        .collect()
}

fn lookup<'a>(input: &'a Value, path: &str) -> Option<&'a Value> {
    if path.starts_with('/') {
        input.pointer(path)
    } else {
        input.get(path)
    }
}

/// Convert an input value: strings to text, booleans to flags, numbers to
/// their decimal text, anything missing or null to empty text.
pub fn json_to_field_value(value: Option<&Value>) -> FieldValue {
    match value {
        Some(Value::String(text)) => FieldValue::text(text.as_str()),
        Some(Value::Bool(flag)) => FieldValue::flag(*flag),
        Some(Value::Number(number)) => FieldValue::text(number.to_string()),
        Some(Value::Null) | None => FieldValue::default(),
        Some(other) => FieldValue::text(other.to_string()),
    }
}
