//! Derivation of the initial state from external input.

use refova_core::reduce_errors;
use refova_model::{Errors, FormOptions, FormState, Values};
use refova_validate::{Payload, RuleSet};

/// Build a fresh state from already mapped values.
///
/// Changed starts empty. Errors start empty unless `validate_on_init` is set,
/// in which case they hold every failing field of `values`.
pub fn derive_state<I: ?Sized>(
    values: Values,
    rules: &RuleSet<I>,
    options: &FormOptions,
    input: &I,
) -> FormState {
    let changed = Vec::new();
    let errors = if options.validate_on_init {
        let payload = Payload::new(&values, &changed, input);
        reduce_errors(&Errors::new(), &rules.validate_values(&values, &payload))
    } else {
        Errors::new()
    };
    FormState {
        values,
        errors,
        changed,
    }
}
