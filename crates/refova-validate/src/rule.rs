//! Validation rules: a test predicate paired with a message.

use std::fmt;

use refova_model::FieldValue;

use crate::payload::Payload;

pub type TestFn<I> = dyn Fn(&FieldValue, &Payload<'_, I>) -> bool;
pub type MessageFn<I> = dyn Fn(&FieldValue, &Payload<'_, I>) -> String;

/// Message reported when a rule fails.
pub enum Message<I: ?Sized> {
    Literal(String),
    /// Built from the failing value and payload.
    Computed(Box<MessageFn<I>>),
}

impl<I: ?Sized> Message<I> {
    pub fn computed<F>(message: F) -> Self
    where
        F: Fn(&FieldValue, &Payload<'_, I>) -> String + 'static,
    {
        Self::Computed(Box::new(message))
    }

    pub fn resolve(&self, value: &FieldValue, payload: &Payload<'_, I>) -> String {
        match self {
            Self::Literal(message) => message.clone(),
            Self::Computed(message) => message(value, payload),
        }
    }
}

impl<I: ?Sized> From<&str> for Message<I> {
    fn from(message: &str) -> Self {
        Self::Literal(message.to_string())
    }
}

impl<I: ?Sized> From<String> for Message<I> {
    fn from(message: String) -> Self {
        Self::Literal(message)
    }
}

impl<I: ?Sized> fmt::Debug for Message<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(message) => f.debug_tuple("Literal").field(message).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A single validation rule for a field.
pub struct Rule<I: ?Sized> {
    test: Box<TestFn<I>>,
    message: Message<I>,
}

impl<I: ?Sized> Rule<I> {
    pub fn new<F>(test: F, message: impl Into<Message<I>>) -> Self
    where
        F: Fn(&FieldValue, &Payload<'_, I>) -> bool + 'static,
    {
        Self {
            test: Box::new(test),
            message: message.into(),
        }
    }

    /// Returns true when `value` passes the rule.
    pub fn test(&self, value: &FieldValue, payload: &Payload<'_, I>) -> bool {
        (self.test)(value, payload)
    }

    pub fn message(&self) -> &Message<I> {
        &self.message
    }
}

impl<I: ?Sized> fmt::Debug for Rule<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
