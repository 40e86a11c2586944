//! Replays a [`Scenario`] through a form.

use std::cell::Cell;
use std::rc::Rc;

use refova_engine::{FormConfig, InputTransition};
use refova_model::{FormState, Result};
use refova_validate::compile_rules;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::logging::redact_value;
use crate::scenario::{Scenario, Step, map_fields};

/// Outcome of a replayed scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Number of replayed steps.
    pub steps: usize,
    /// Number of times subscribers were notified.
    pub notifications: usize,
    /// Input steps that re-derived the state.
    pub resets: usize,
    pub valid: bool,
    pub state: FormState,
}

/// Build the form described by `scenario` and replay its steps.
///
/// # Errors
///
/// Returns an error if the rules cannot be compiled or a change step has
/// neither a name nor an id.
pub fn run(scenario: &Scenario) -> Result<RunReport> {
    let rules = compile_rules::<Value>(&scenario.rules)?;
    let fields = scenario.fields.clone();
    let mut form = FormConfig::new(move |input: &Value| map_fields(&fields, input))
        .with_rules(rules)
        .with_options(scenario.options)
        .build(scenario.input.clone());
    info!(
        fields = form.values().len(),
        rules = scenario.rules.len(),
        steps = scenario.steps.len(),
        "form built"
    );

    let notifications = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&notifications);
    form.subscribe(move |_| counter.set(counter.get() + 1));

    let mut resets = 0;
    for (index, step) in scenario.steps.iter().enumerate() {
        debug!(step = index, op = step.name(), "replaying step");
        match step {
            Step::SetValue {
                key,
                value,
                validate,
            } => {
                debug!(key = %key, value = redact_value(&value.to_string()), "set value");
                form.set_value(key.clone(), value.clone(), *validate);
            }
            Step::SetValues { values, validate } => {
                form.set_values(values.clone(), *validate);
            }
            Step::ResetError { keys } => form.reset_error(keys.clone()),
            Step::Validate => {
                form.validate();
            }
            Step::ValidateValue { keys } => {
                form.validate_value(keys.clone());
            }
            Step::Reset => form.reset(),
            Step::Input { input } => {
                if form.receive_input(input.clone()) == InputTransition::Reset {
                    resets += 1;
                }
            }
            Step::Change { target } => form.handle_change(target)?,
            Step::OnlyChange { target } => form.handle_only_change(target)?,
        }
    }

    let valid = form.is_valid();
    if valid {
        info!(steps = scenario.steps.len(), "scenario finished");
    } else {
        warn!(
            errors = form.errors().len(),
            fields = ?form.errors().keys().collect::<Vec<_>>(),
            "scenario finished with errors"
        );
    }
    Ok(RunReport {
        steps: scenario.steps.len(),
        notifications: notifications.get(),
        resets,
        valid,
        state: form.into_state(),
    })
}
