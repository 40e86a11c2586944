//! Integration tests for scenario replay.

use std::io::Write;

use refova_cli::runner::run;
use refova_cli::scenario::Scenario;
use refova_model::FieldValue;
use tempfile::NamedTempFile;

const SIGNUP: &str = r#"{
    "input": {"user": {"email": "example"}, "password": "qwe", "agree": false},
    "fields": {"email": "/user/email", "password": "password", "agree": "agree"},
    "rules": {
        "email": [
            {"kind": "contains", "needle": "@", "message": "Not valid email"},
            {"kind": "matches", "pattern": "(gmail|icloud)\\.com$", "message": "Domain is not allowed"}
        ],
        "password": [
            {"kind": "min_length", "min": 6, "message": "Password should be at least 6 chars length"}
        ],
        "agree": [
            {"kind": "checked", "message": "You must agree"}
        ]
    },
    "steps": []
}"#;

fn signup_with(steps: &str, options: &str) -> Scenario {
    let mut scenario = Scenario::from_json(SIGNUP).unwrap();
    scenario.steps = serde_json::from_str(steps).unwrap();
    scenario.options = serde_json::from_str(options).unwrap();
    scenario
}

#[test]
fn signup_flow_reaches_valid_state() {
    let scenario = signup_with(
        r#"[
            {"op": "set_value", "key": "email", "value": "example@email.com"},
            {"op": "set_value", "key": "password", "value": "qwerty"},
            {"op": "change", "target": {"type": "checkbox", "name": "agree", "checked": true}},
            {"op": "set_value", "key": "email", "value": "example@gmail.com"}
        ]"#,
        "{}",
    );

    let report = run(&scenario).unwrap();

    insta::assert_json_snapshot!(report, @r#"
    {
      "steps": 4,
      "notifications": 4,
      "resets": 0,
      "valid": true,
      "state": {
        "values": {
          "email": "example@gmail.com",
          "password": "qwerty",
          "agree": true
        },
        "errors": {},
        "changed": [
          "email",
          "password",
          "agree"
        ]
      }
    }
    "#);
}

#[test]
fn failing_rules_leave_errors() {
    let scenario = signup_with(
        r#"[
            {"op": "set_value", "key": "email", "value": "example@email.com"},
            {"op": "validate"}
        ]"#,
        "{}",
    );

    let report = run(&scenario).unwrap();

    assert!(!report.valid);
    assert_eq!(
        report.state.error("email"),
        Some("Domain is not allowed")
    );
    assert_eq!(
        report.state.error("password"),
        Some("Password should be at least 6 chars length")
    );
    assert_eq!(report.state.error("agree"), Some("You must agree"));
    assert_eq!(report.state.changed, vec!["email".to_string()]);
}

#[test]
fn only_change_and_reset_error_skip_validation() {
    let scenario = signup_with(
        r#"[
            {"op": "only_change", "target": {"name": "email", "value": "nope"}},
            {"op": "validate_value", "keys": ["email", "password"]},
            {"op": "reset_error", "keys": "email"}
        ]"#,
        "{}",
    );

    let report = run(&scenario).unwrap();

    assert_eq!(report.state.value("email"), Some(&FieldValue::text("nope")));
    assert_eq!(report.state.error("email"), None);
    assert_eq!(
        report.state.error("password"),
        Some("Password should be at least 6 chars length")
    );
    assert_eq!(report.notifications, 3);
}

#[test]
fn new_input_resets_state() {
    let scenario = signup_with(
        r#"[
            {"op": "set_value", "key": "password", "value": "secret"},
            {"op": "input", "input": {"user": {"email": "example"}, "password": "qwe", "agree": false}},
            {"op": "input", "input": {"user": {"email": "new@icloud.com"}, "password": "qwe", "agree": true}}
        ]"#,
        r#"{"validate_on_init": true}"#,
    );

    let report = run(&scenario).unwrap();

    assert_eq!(report.resets, 1);
    assert_eq!(report.notifications, 2);
    assert!(report.state.changed.is_empty());
    assert_eq!(
        report.state.value("email"),
        Some(&FieldValue::text("new@icloud.com"))
    );
    assert_eq!(report.state.error("email"), None);
    assert_eq!(
        report.state.error("password"),
        Some("Password should be at least 6 chars length")
    );
}

#[test]
fn disabled_reset_keeps_edits() {
    let scenario = signup_with(
        r#"[
            {"op": "set_value", "key": "password", "value": "secret"},
            {"op": "input", "input": {"user": {"email": "other@gmail.com"}}}
        ]"#,
        r#"{"reset_when_input_changes": false}"#,
    );

    let report = run(&scenario).unwrap();

    assert_eq!(report.resets, 0);
    assert_eq!(
        report.state.value("password"),
        Some(&FieldValue::text("secret"))
    );
    assert_eq!(report.state.value("email"), Some(&FieldValue::text("example")));
}

#[test]
fn change_without_key_is_an_error() {
    let scenario = signup_with(r#"[{"op": "change", "target": {"value": "x"}}]"#, "{}");
    let error = run(&scenario).unwrap_err();
    assert!(matches!(error, refova_model::RefovaError::MissingFieldKey));
}

#[test]
fn field_order_follows_scenario_file() {
    let scenario = signup_with("[]", "{}");
    assert_eq!(
        scenario.fields.keys().collect::<Vec<_>>(),
        ["email", "password", "agree"]
    );
    let report = run(&scenario).unwrap();
    assert_eq!(
        report.state.values.keys().collect::<Vec<_>>(),
        ["email", "password", "agree"]
    );
}

#[test]
fn loads_scenario_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SIGNUP.as_bytes()).unwrap();

    let scenario = Scenario::load(file.path()).unwrap();

    assert_eq!(scenario.fields.len(), 3);
    assert_eq!(
        scenario.map_input(&scenario.input)["agree"],
        FieldValue::flag(false)
    );
}
