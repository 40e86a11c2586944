//! Configuration options for form behavior.

use serde::{Deserialize, Serialize};

/// Which fields `set_values` validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationScope {
    /// Only the keys present in the patch.
    #[default]
    Patch,
    /// Every key of the merged values.
    Form,
}

/// Which values `set_values` exposes to rules through the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadValues {
    /// The full values after merging the patch.
    #[default]
    Merged,
    /// Only the patch, as passed in.
    Patch,
}

/// Options controlling form behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Fully reset the state when the mapped values of a new external input
    /// differ from the previous ones.
    pub reset_when_input_changes: bool,

    /// Validate the derived values on initialization and on every reset.
    pub validate_on_init: bool,

    pub validation_scope: ValidationScope,

    pub payload_values: PayloadValues,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            reset_when_input_changes: true,
            validate_on_init: false,
            validation_scope: ValidationScope::default(),
            payload_values: PayloadValues::default(),
        }
    }
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reset_when_input_changes(mut self, enable: bool) -> Self {
        self.reset_when_input_changes = enable;
        self
    }

    #[must_use]
    pub fn with_validate_on_init(mut self, enable: bool) -> Self {
        self.validate_on_init = enable;
        self
    }

    #[must_use]
    pub fn with_validation_scope(mut self, scope: ValidationScope) -> Self {
        self.validation_scope = scope;
        self
    }

    #[must_use]
    pub fn with_payload_values(mut self, payload_values: PayloadValues) -> Self {
        self.payload_values = payload_values;
        self
    }
}
