//! Tests for the built-in checks and rule evaluation order.

use std::cell::Cell;
use std::rc::Rc;

use refova_model::{FieldValue, ValidationOutcome, Values};
use refova_validate::{Payload, Rule, RuleSet, checks};

fn text(value: &str) -> FieldValue {
    FieldValue::text(value)
}

fn passes(rule: &Rule<()>, value: FieldValue) -> bool {
    let values = Values::new();
    rule.test(&value, &Payload::new(&values, &[], &()))
}

#[test]
fn required_rejects_blank_text() {
    let rule = checks::required::<()>("Required field");
    assert!(!passes(&rule, text("")));
    assert!(!passes(&rule, text("   ")));
    assert!(passes(&rule, text("User")));
    assert!(passes(&rule, FieldValue::flag(false)));
}

#[test]
fn length_counts_characters() {
    let min = checks::min_length::<()>(6, "Too short");
    assert!(!passes(&min, text("qwe")));
    assert!(passes(&min, text("qwerty")));
    assert!(passes(&min, text("пароль")));

    let max = checks::max_length::<()>(3, "Too long");
    assert!(passes(&max, text("abc")));
    assert!(!passes(&max, text("abcd")));
}

#[test]
fn contains_and_matches() {
    let at = checks::contains::<()>("@", "Not valid email");
    assert!(!passes(&at, text("example")));
    assert!(passes(&at, text("example@email.com")));

    let domain = checks::matches::<()>(r"gmail\.com|icloud\.com", "Domain is not allowed")
        .expect("valid pattern");
    assert!(passes(&domain, text("x@gmail.com")));
    assert!(!passes(&domain, text("x@email.com")));
}

#[test]
fn one_of_and_checked() {
    let color = checks::one_of::<(), _>(["red", "green"], "Unknown color");
    assert!(passes(&color, text("red")));
    assert!(!passes(&color, text("blue")));

    let agree = checks::checked::<()>("You must agree");
    assert!(passes(&agree, FieldValue::flag(true)));
    assert!(!passes(&agree, FieldValue::flag(false)));
    assert!(!passes(&agree, text("true")));
}

#[test]
fn same_as_reads_other_field_from_payload() {
    let rule = checks::same_as::<()>("password", "Passwords do not match");
    let values: Values = [("password".to_string(), text("qwerty"))].into_iter().collect();
    let payload = Payload::new(&values, &[], &());

    assert!(rule.test(&text("qwerty"), &payload));
    assert!(!rule.test(&text("qwertz"), &payload));

    let empty = Values::new();
    let payload = Payload::new(&empty, &[], &());
    assert!(rule.test(&text(""), &payload));
    assert!(!rule.test(&text("qwerty"), &payload));
}

#[test]
fn email_rules_stop_at_first_failure() {
    let domain_calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&domain_calls);
    let rules = RuleSet::<()>::new().field(
        "email",
        vec![
            checks::contains("@", "Not valid email"),
            Rule::new(
                move |value: &FieldValue, _: &Payload<'_, ()>| {
                    counter.set(counter.get() + 1);
                    let value = value.to_string();
                    value.ends_with("gmail.com") || value.ends_with("icloud.com")
                },
                "Domain is not allowed",
            ),
        ],
    );
    let values = Values::new();
    let payload = Payload::new(&values, &[], &());

    let outcome = rules.validate_value("email", &text("example"), &payload);
    assert_eq!(outcome, ValidationOutcome::invalid("Not valid email"));
    assert_eq!(domain_calls.get(), 0);

    let outcome = rules.validate_value("email", &text("example@email.com"), &payload);
    assert_eq!(outcome, ValidationOutcome::invalid("Domain is not allowed"));
    assert_eq!(domain_calls.get(), 1);

    let outcome = rules.validate_value("email", &text("example@gmail.com"), &payload);
    assert!(outcome.is_valid());
}

#[test]
fn predicates_see_external_input() {
    struct Limits {
        max: usize,
    }

    let rules = RuleSet::<Limits>::new().field(
        "bio",
        vec![Rule::new(
            |value: &FieldValue, payload: &Payload<'_, Limits>| value.char_len() <= payload.input.max,
            "Bio is too long",
        )],
    );
    let values = Values::new();
    let limits = Limits { max: 4 };
    let payload = Payload::new(&values, &[], &limits);

    assert!(rules.validate_value("bio", &text("abcd"), &payload).is_valid());
    assert!(!rules.validate_value("bio", &text("abcde"), &payload).is_valid());
}
