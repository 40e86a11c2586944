//! Presence check.

use crate::rule::{Message, Rule};

/// Fails for empty or whitespace-only text. Flags always pass; use
/// [`checked`](super::checked) to require a ticked checkbox.
pub fn required<I: ?Sized>(message: impl Into<Message<I>>) -> Rule<I> {
    Rule::new(|value, _| !value.is_blank(), message)
}
