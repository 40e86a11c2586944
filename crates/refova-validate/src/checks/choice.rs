use refova_model::FieldValue;

use crate::rule::{Message, Rule};

/// Passes when the textual form of the value is one of `options`.
pub fn one_of<I, S>(options: impl IntoIterator<Item = S>, message: impl Into<Message<I>>) -> Rule<I>
where
    I: ?Sized,
    S: Into<String>,
{
    let options: Vec<String> = options.into_iter().map(Into::into).collect();
    Rule::new(
        move |value, _| {
            let value = value.to_string();
            options.iter().any(|option| *option == value)
        },
        message,
    )
}

/// Passes only for a ticked checkbox.
pub fn checked<I: ?Sized>(message: impl Into<Message<I>>) -> Rule<I> {
    Rule::new(|value, _| *value == FieldValue::Flag(true), message)
}
