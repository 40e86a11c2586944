//! The form engine.
//!
//! A [`Form`] owns the values/errors/changed triple derived from an external
//! input and exposes the operations a host calls in response to user
//! interaction. Every mutating operation notifies subscribers with the new
//! state once it has completed.

use std::fmt;

use refova_core::{FieldTarget, field_entry, reduce_changed, reduce_errors, reduce_values};
use refova_model::{
    Changed, Errors, FieldKeys, FieldValue, FormOptions, FormState, PayloadValues, Result,
    ValidationOutcome, ValidationResults, ValidationScope, Values,
};
use refova_validate::{Payload, RuleSet};
use tracing::debug;

use crate::derive::derive_state;
use crate::lifecycle::{InputTransition, input_transition};
use crate::subscription::{SubscriptionId, Subscribers};

type MapInput<I> = dyn Fn(&I) -> Values;

/// Everything a form needs from its host besides the input itself.
pub struct FormConfig<I> {
    map_input: Box<MapInput<I>>,
    rules: RuleSet<I>,
    options: FormOptions,
}

impl<I> Default for FormConfig<I> {
    /// No rules, default options and a mapping that yields no values.
    fn default() -> Self {
        Self {
            map_input: Box::new(|_: &I| Values::new()),
            rules: RuleSet::new(),
            options: FormOptions::default(),
        }
    }
}

impl<I> FormConfig<I> {
    pub fn new<F>(map_input: F) -> Self
    where
        F: Fn(&I) -> Values + 'static,
    {
        Self {
            map_input: Box::new(map_input),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet<I>) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self, input: I) -> Form<I> {
        Form::new(self, input)
    }
}

impl<I> fmt::Debug for FormConfig<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormConfig")
            .field("rules", &self.rules)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Form state engine over an external input of type `I`.
pub struct Form<I> {
    config: FormConfig<I>,
    input: I,
    state: FormState,
    subscribers: Subscribers,
}

impl<I> Form<I> {
    /// Create a form and derive its initial state from `input`.
    pub fn new(config: FormConfig<I>, input: I) -> Self {
        let state = derive_state(
            (config.map_input)(&input),
            &config.rules,
            &config.options,
            &input,
        );
        debug!(
            fields = state.values.len(),
            errors = state.errors.len(),
            "form initialized"
        );
        Self {
            config,
            input,
            state,
            subscribers: Subscribers::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &Values {
        &self.state.values
    }

    pub fn errors(&self) -> &Errors {
        &self.state.errors
    }

    pub fn changed(&self) -> &Changed {
        &self.state.changed
    }

    /// The external input the state was derived from or last received.
    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn options(&self) -> &FormOptions {
        &self.config.options
    }

    pub fn rules(&self) -> &RuleSet<I> {
        &self.config.rules
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    /// Set one value and optionally validate it.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<FieldValue>, validate: bool) {
        let entry: (String, FieldValue) = (key.into(), value.into());
        self.set_values([entry], validate);
    }

    /// Merge `patch` into the values and mark its keys as changed.
    ///
    /// With `validate`, the fields selected by the validation scope are
    /// re-validated and their results merged into the errors; otherwise the
    /// errors are left untouched.
    pub fn set_values<K, V>(&mut self, patch: impl IntoIterator<Item = (K, V)>, validate: bool)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let patch: Values = patch
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        let values = reduce_values(&self.state.values, &patch);
        let changed = reduce_changed(&self.state.changed, patch.keys().cloned().collect::<FieldKeys>());
        let errors = if validate {
            let options = &self.config.options;
            let payload_values = match options.payload_values {
                PayloadValues::Merged => &values,
                PayloadValues::Patch => &patch,
            };
            let targets = match options.validation_scope {
                ValidationScope::Patch => &patch,
                ValidationScope::Form => &values,
            };
            let payload = Payload::new(payload_values, &changed, &self.input);
            let results = self.config.rules.validate_values(targets, &payload);
            reduce_errors(&self.state.errors, &results)
        } else {
            std::mem::take(&mut self.state.errors)
        };
        debug!(
            fields = ?patch.keys().collect::<Vec<_>>(),
            validate,
            errors = errors.len(),
            "set values"
        );
        self.commit(FormState {
            values,
            errors,
            changed,
        });
    }

    /// Set a value from a change target and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the target has neither a name nor an id.
    pub fn handle_change<T: FieldTarget + ?Sized>(&mut self, target: &T) -> Result<()> {
        let (key, value) = field_entry(target)?;
        self.set_value(key, value, true);
        Ok(())
    }

    /// Set a value from a change target without validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the target has neither a name nor an id.
    pub fn handle_only_change<T: FieldTarget + ?Sized>(&mut self, target: &T) -> Result<()> {
        let (key, value) = field_entry(target)?;
        self.set_value(key, value, false);
        Ok(())
    }

    /// Clear the errors of one or many fields.
    pub fn reset_error(&mut self, keys: impl Into<FieldKeys>) {
        let results: ValidationResults = keys
            .into()
            .into_iter()
            .map(|key| (key, ValidationOutcome::Valid))
            .collect();
        let errors = reduce_errors(&self.state.errors, &results);
        debug!(fields = ?results.keys().collect::<Vec<_>>(), "reset errors");
        self.state.errors = errors;
        self.notify();
    }

    /// Re-validate one or many fields against the current values.
    ///
    /// A field without a current value is validated as empty text. Returns
    /// true when no field has an error afterwards.
    pub fn validate_value(&mut self, keys: impl Into<FieldKeys>) -> bool {
        let selected: Values = keys
            .into()
            .into_iter()
            .map(|key| {
                let value = self.state.values.get(&key).cloned().unwrap_or_default();
                (key, value)
            })
            .collect();
        let payload = Payload::new(&self.state.values, &self.state.changed, &self.input);
        let results = self.config.rules.validate_values(&selected, &payload);
        let errors = reduce_errors(&self.state.errors, &results);
        debug!(
            fields = ?selected.keys().collect::<Vec<_>>(),
            errors = errors.len(),
            "validated fields"
        );
        self.state.errors = errors;
        self.notify();
        self.state.is_valid()
    }

    /// Re-validate every current value. Returns true when the form is valid.
    pub fn validate(&mut self) -> bool {
        let keys: FieldKeys = self.state.values.keys().cloned().collect();
        self.validate_value(keys)
    }

    /// Re-derive the whole state from the current input.
    pub fn reset(&mut self) {
        let state = self.derive();
        debug!(fields = state.values.len(), "reset state");
        self.commit(state);
    }

    /// Replace the input and re-derive the whole state from it.
    pub fn reset_with(&mut self, input: I) {
        self.input = input;
        self.reset();
    }

    /// Receive a new external input.
    ///
    /// The input always replaces the current one. When the input change
    /// policy is enabled and the mapped values differ from those of the
    /// previous input, the state is fully re-derived; otherwise the state is
    /// kept as is.
    pub fn receive_input(&mut self, input: I) -> InputTransition {
        if !self.config.options.reset_when_input_changes {
            debug!(transition = ?InputTransition::Retained, "received input");
            self.input = input;
            return InputTransition::Retained;
        }
        let previous = (self.config.map_input)(&self.input);
        let next = (self.config.map_input)(&input);
        let transition = input_transition(&self.config.options, &previous, &next);
        debug!(?transition, "received input");
        self.input = input;
        if transition == InputTransition::Reset {
            let state = derive_state(next, &self.config.rules, &self.config.options, &self.input);
            self.commit(state);
        }
        transition
    }

    /// Register a listener called with the new state after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FormState) + 'static,
    {
        self.subscribers.add(Box::new(listener))
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Consume the form and return its state.
    pub fn into_state(self) -> FormState {
        self.state
    }

    fn derive(&self) -> FormState {
        derive_state(
            (self.config.map_input)(&self.input),
            &self.config.rules,
            &self.config.options,
            &self.input,
        )
    }

    fn commit(&mut self, state: FormState) {
        self.state = state;
        self.notify();
    }

    fn notify(&mut self) {
        self.subscribers.notify(&self.state);
    }
}

impl<I: fmt::Debug> fmt::Debug for Form<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("input", &self.input)
            .field("state", &self.state)
            .field("options", &self.config.options)
            .field("subscribers", &self.subscribers)
            .finish_non_exhaustive()
    }
}
