//! Checks that compare a value with other fields of the payload.

use refova_model::FieldValue;

use crate::rule::{Message, Rule};

/// Passes when the value equals the current value of `field`.
///
/// A missing `field` compares as an empty text value.
pub fn same_as<I: ?Sized>(field: impl Into<String>, message: impl Into<Message<I>>) -> Rule<I> {
    let field = field.into();
    Rule::new(
        move |value, payload| match payload.values.get(&field) {
            Some(other) => other == value,
            None => *value == FieldValue::default(),
        },
        message,
    )
}
