//! Rule set and the first-failure evaluator.
//!
//! Rules for a field run in declaration order and evaluation stops at the
//! first failing rule, so later predicates are never called for that value.
//! Fields without rules are always valid.

use std::fmt;

use indexmap::IndexMap;
use refova_model::{FieldValue, ValidationOutcome, ValidationResults, Values};
use tracing::trace;

use crate::payload::Payload;
use crate::rule::Rule;

/// Ordered validation rules keyed by field.
pub struct RuleSet<I: ?Sized> {
    rules_by_field: IndexMap<String, Vec<Rule<I>>>,
}

impl<I: ?Sized> Default for RuleSet<I> {
    fn default() -> Self {
        Self {
            rules_by_field: IndexMap::new(),
        }
    }
}

impl<I: ?Sized> RuleSet<I> {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RuleSet::add_rules`].
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, rules: Vec<Rule<I>>) -> Self {
        self.add_rules(key, rules);
        self
    }

    /// Append rules for a field after any already registered.
    pub fn add_rules(&mut self, key: impl Into<String>, rules: Vec<Rule<I>>) {
        self.rules_by_field.entry(key.into()).or_default().extend(rules);
    }

    pub fn add_rule(&mut self, key: impl Into<String>, rule: Rule<I>) {
        self.rules_by_field.entry(key.into()).or_default().push(rule);
    }

    /// Rules registered for a field, empty if none.
    pub fn rules_for(&self, key: &str) -> &[Rule<I>] {
        self.rules_by_field
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules_by_field.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.rules_by_field.is_empty()
    }

    /// Validate a single value against the rules for `key`.
    ///
    /// Returns the message of the first failing rule, or `Valid`.
    pub fn validate_value(
        &self,
        key: &str,
        value: &FieldValue,
        payload: &Payload<'_, I>,
    ) -> ValidationOutcome {
        for (index, rule) in self.rules_for(key).iter().enumerate() {
            if rule.test(value, payload) {
                continue;
            }
            trace!(field = key, rule = index, "rule failed");
            return ValidationOutcome::Invalid(rule.message().resolve(value, payload));
        }
        ValidationOutcome::Valid
    }

    /// Validate every entry of `values` independently.
    pub fn validate_values(&self, values: &Values, payload: &Payload<'_, I>) -> ValidationResults {
        values
            .iter()
            .map(|(key, value)| (key.clone(), self.validate_value(key, value, payload)))
            .collect()
    }
}

impl<I: ?Sized> fmt::Debug for RuleSet<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.rules_by_field
                    .iter()
                    .map(|(key, rules)| (key, rules.len())),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use crate::rule::Message;

    fn counted(counter: &Rc<Cell<usize>>, pass: bool, message: &str) -> Rule<()> {
        let counter = Rc::clone(counter);
        Rule::new(
            move |_, _| {
                counter.set(counter.get() + 1);
                pass
            },
            message,
        )
    }

    #[test]
    fn first_failing_rule_wins_and_short_circuits() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let rules = RuleSet::new().field(
            "email",
            vec![
                counted(&first, false, "first"),
                counted(&second, false, "second"),
            ],
        );
        let values = Values::new();
        let payload = Payload::new(&values, &[], &());

        let outcome = rules.validate_value("email", &FieldValue::text("x"), &payload);

        assert_eq!(outcome, ValidationOutcome::invalid("first"));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn field_without_rules_is_valid() {
        let rules: RuleSet<()> = RuleSet::new();
        let values = Values::new();
        let payload = Payload::new(&values, &[], &());
        assert!(rules
            .validate_value("username", &FieldValue::text(""), &payload)
            .is_valid());
    }

    #[test]
    fn computed_message_receives_value() {
        let rules = RuleSet::<()>::new().field(
            "email",
            vec![Rule::new(
                |value: &FieldValue, _: &Payload<'_, ()>| value.to_string().contains('@'),
                Message::<()>::computed(|value, _| format!("<{value}> is not valid email address")),
            )],
        );
        let values = Values::new();
        let payload = Payload::new(&values, &[], &());
        let outcome = rules.validate_value("email", &FieldValue::text("example"), &payload);
        assert_eq!(
            outcome.message(),
            Some("<example> is not valid email address")
        );
    }

    #[test]
    fn validate_values_reports_every_key() {
        let rules = RuleSet::<()>::new()
            .field("a", vec![Rule::new(|_, _| false, "a failed")])
            .field("b", vec![Rule::new(|_, _| true, "b failed")]);
        let values: Values = [
            ("a".to_string(), FieldValue::text("1")),
            ("b".to_string(), FieldValue::text("2")),
            ("c".to_string(), FieldValue::text("3")),
        ]
        .into_iter()
        .collect();
        let payload = Payload::new(&values, &[], &());

        let results = rules.validate_values(&values, &payload);

        assert_eq!(results.len(), 3);
        assert_eq!(results["a"], ValidationOutcome::invalid("a failed"));
        assert!(results["b"].is_valid());
        assert!(results["c"].is_valid());
    }
}
