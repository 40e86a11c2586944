//! State transitions shared by every form: pure reducers over the
//! values/errors/changed triple and change-target extraction.

pub mod field;
pub mod reducers;

pub use field::{FieldTarget, InputElement, InputKind, field_entry, field_key, field_value};
pub use reducers::{reduce_changed, reduce_errors, reduce_values, uniq};
