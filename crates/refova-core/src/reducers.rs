//! Reducers for the values/errors/changed triple.
//!
//! Every reducer takes the current mapping by reference and returns a new
//! one; inputs are never mutated.

use std::hash::Hash;

use indexmap::IndexSet;
use refova_model::{
    Changed, Errors, FieldKeys, ValidationOutcome, ValidationResults, Values,
};

/// Merge `patch` into `values`.
///
/// Keys in the patch overwrite existing entries in place or are appended;
/// everything else is carried over.
pub fn reduce_values(values: &Values, patch: &Values) -> Values {
    let mut next = values.clone();
    next.extend(patch.iter().map(|(key, value)| (key.clone(), value.clone())));
    next
}

/// Append `keys` to `changed`, skipping keys that are already tracked.
pub fn reduce_changed(changed: &[String], keys: impl Into<FieldKeys>) -> Changed {
    uniq(changed.iter().cloned().chain(keys.into()))
}

/// Apply validation results to `errors`.
///
/// A `Valid` result removes the key, an `Invalid` one sets its message.
/// Keys not mentioned in `results` are carried over unchanged.
pub fn reduce_errors(errors: &Errors, results: &ValidationResults) -> Errors {
    let mut next = errors.clone();
    for (key, outcome) in results {
        match outcome {
            ValidationOutcome::Valid => {
                next.shift_remove(key);
            }
            ValidationOutcome::Invalid(message) => {
                next.insert(key.clone(), message.clone());
            }
        }
    }
    next
}

/// Duplicate-free copy of `items`, keeping the first occurrence of each.
pub fn uniq<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<IndexSet<T>>().into_iter().collect()
}
