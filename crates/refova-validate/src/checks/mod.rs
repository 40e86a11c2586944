//! Built-in rule constructors.
//!
//! Each module builds rules for one kind of check. Every constructor is
//! generic over the external input type, so the rules can be mixed freely
//! with host-specific ones in the same rule set.

mod choice;
mod cross_field;
mod length;
mod pattern;
mod required;

pub use choice::{checked, one_of};
pub use cross_field::same_as;
pub use length::{max_length, min_length};
pub use pattern::{contains, matches};
pub use required::required;
