//! External input change policy.

use refova_model::{FormOptions, Values};

/// What a form did with a newly received external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTransition {
    /// The policy is disabled; the input was stored without touching state.
    Retained,
    /// Mapped values are structurally equal to the previous ones.
    Unchanged,
    /// Mapped values differ; state was fully re-derived from the new input.
    Reset,
}

/// Decide the transition for a new input given the previous and next mapped values.
pub fn input_transition(options: &FormOptions, previous: &Values, next: &Values) -> InputTransition {
    if !options.reset_when_input_changes {
        InputTransition::Retained
    } else if previous == next {
        InputTransition::Unchanged
    } else {
        InputTransition::Reset
    }
}
