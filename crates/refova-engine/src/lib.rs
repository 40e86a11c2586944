//! Form state engine.
//!
//! A [`Form`] derives its values from an external input through a host
//! supplied mapping, tracks which fields changed, and keeps validation errors
//! in sync with the values through a [`RuleSet`](refova_validate::RuleSet).
//!
//! # Example
//!
//! ```
//! use refova_engine::{FormConfig, InputTransition};
//! use refova_model::{FieldValue, Values};
//! use refova_validate::{RuleSet, checks};
//!
//! struct Props {
//!     email: String,
//! }
//!
//! let mut form = FormConfig::new(|props: &Props| {
//!     Values::from([("email".to_string(), FieldValue::text(props.email.as_str()))])
//! })
//! .with_rules(RuleSet::new().field("email", vec![checks::contains("@", "Not valid email")]))
//! .build(Props { email: String::new() });
//!
//! form.set_value("email", "example", true);
//! assert_eq!(form.errors()["email"], "Not valid email");
//! assert_eq!(form.changed(), &["email"]);
//!
//! let transition = form.receive_input(Props { email: "a@b.c".into() });
//! assert_eq!(transition, InputTransition::Reset);
//! assert!(form.changed().is_empty());
//! ```

mod derive;
mod form;
mod lifecycle;
mod subscription;

pub use derive::derive_state;
pub use form::{Form, FormConfig};
pub use lifecycle::{InputTransition, input_transition};
pub use subscription::SubscriptionId;
