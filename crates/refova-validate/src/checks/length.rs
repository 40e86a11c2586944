//! Character length checks.

use crate::rule::{Message, Rule};

pub fn min_length<I: ?Sized>(min: usize, message: impl Into<Message<I>>) -> Rule<I> {
    Rule::new(move |value, _| value.char_len() >= min, message)
}

pub fn max_length<I: ?Sized>(max: usize, message: impl Into<Message<I>>) -> Rule<I> {
    Rule::new(move |value, _| value.char_len() <= max, message)
}
