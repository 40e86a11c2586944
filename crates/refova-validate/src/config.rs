//! Declarative rule configuration.
//!
//! Rules loaded from configuration files are described by [`RuleConfig`] and
//! compiled into a [`RuleSet`] for any external input type. A message that
//! contains the `{value}` placeholder becomes a computed message that
//! substitutes the failing value.

use indexmap::IndexMap;
use refova_model::{RefovaError, Result};
use serde::{Deserialize, Serialize};

use crate::checks;
use crate::evaluator::RuleSet;
use crate::rule::{Message, Rule};

/// Placeholder replaced by the failing value in configured messages.
pub const VALUE_PLACEHOLDER: &str = "{value}";

/// Kind of a built-in check and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    Required,
    MinLength { min: usize },
    MaxLength { max: usize },
    Contains { needle: String },
    Matches { pattern: String },
    OneOf { options: Vec<String> },
    Checked,
    SameAs { field: String },
}

/// Every rule kind with a short description, in declaration order.
pub const RULE_KINDS: &[(&str, &str)] = &[
    ("required", "value is not empty or whitespace-only"),
    ("min_length", "value has at least `min` characters"),
    ("max_length", "value has at most `max` characters"),
    ("contains", "value contains `needle`"),
    ("matches", "value matches the regular expression `pattern`"),
    ("one_of", "value is one of `options`"),
    ("checked", "checkbox is ticked"),
    ("same_as", "value equals the current value of `field`"),
];

/// One configured rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(flatten)]
    pub kind: RuleKind,
    pub message: String,
}

/// Configured rules keyed by field, in declaration order.
pub type RulesConfig = IndexMap<String, Vec<RuleConfig>>;

impl RuleConfig {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Build the rule described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a `matches` pattern is not a valid regular expression.
    pub fn compile<I: ?Sized>(&self) -> Result<Rule<I>> {
        let message = template_message(&self.message);
        let rule = match &self.kind {
            RuleKind::Required => checks::required(message),
            RuleKind::MinLength { min } => checks::min_length(*min, message),
            RuleKind::MaxLength { max } => checks::max_length(*max, message),
            RuleKind::Contains { needle } => checks::contains(needle.clone(), message),
            RuleKind::Matches { pattern } => checks::matches(pattern, message)?,
            RuleKind::OneOf { options } => checks::one_of(options.iter().cloned(), message),
            RuleKind::Checked => checks::checked(message),
            RuleKind::SameAs { field } => checks::same_as(field.clone(), message),
        };
        Ok(rule)
    }
}

/// Compile configured rules for every field into a rule set.
///
/// # Errors
///
/// Returns the first compilation error, see [`RuleConfig::compile`].
pub fn compile_rules<I: ?Sized>(config: &RulesConfig) -> Result<RuleSet<I>> {
    let mut rules = RuleSet::<I>::new();
    for (field, configs) in config {
        let compiled = configs
            .iter()
            .map(RuleConfig::compile::<I>)
            .collect::<Result<Vec<_>>>()?;
        rules.add_rules(field.clone(), compiled);
    }
    Ok(rules)
}

/// Check that every `same_as` rule refers to a field accepted by `is_known`.
///
/// # Errors
///
/// Returns [`RefovaError::UnknownField`] for the first unknown reference.
pub fn check_references(config: &RulesConfig, is_known: impl Fn(&str) -> bool) -> Result<()> {
    for (owner, configs) in config {
        for rule in configs {
            if let RuleKind::SameAs { field } = &rule.kind
                && !is_known(field)
            {
                return Err(RefovaError::UnknownField {
                    owner: owner.clone(),
                    field: field.clone(),
                });
            }
        }
    }
    Ok(())
}

fn template_message<I: ?Sized>(message: &str) -> Message<I> {
    if !message.contains(VALUE_PLACEHOLDER) {
        return Message::Literal(message.to_string());
    }
    let template = message.to_string();
    Message::computed(move |value, _| template.replace(VALUE_PLACEHOLDER, &value.to_string()))
}
