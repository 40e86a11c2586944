//! Field validation for refova forms.
//!
//! A [`RuleSet`] maps field keys to ordered [`Rule`]s. Each rule pairs a test
//! predicate with a [`Message`]; evaluation reports the first failing rule's
//! message. Predicates and computed messages receive a read-only
//! [`Payload`] with the current values, the changed keys and the external
//! input the form was derived from.
//!
//! # Example
//!
//! ```
//! use refova_model::{FieldValue, Values};
//! use refova_validate::{Payload, RuleSet, checks};
//!
//! let rules = RuleSet::<()>::new().field(
//!     "password",
//!     vec![checks::min_length(6, "Password should be at least 6 chars length")],
//! );
//! let values = Values::new();
//! let payload = Payload::new(&values, &[], &());
//! let outcome = rules.validate_value("password", &FieldValue::text("qwe"), &payload);
//! assert_eq!(outcome.message(), Some("Password should be at least 6 chars length"));
//! ```

pub mod checks;
pub mod config;
mod evaluator;
mod payload;
mod rule;

pub use config::{RULE_KINDS, RuleConfig, RuleKind, RulesConfig, check_references, compile_rules};
pub use evaluator::RuleSet;
pub use payload::Payload;
pub use rule::{Message, MessageFn, Rule, TestFn};
