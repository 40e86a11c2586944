pub mod error;
pub mod keys;
pub mod options;
pub mod outcome;
pub mod state;
pub mod value;

pub use error::{RefovaError, Result};
pub use keys::FieldKeys;
pub use options::{FormOptions, PayloadValues, ValidationScope};
pub use outcome::{ValidationOutcome, ValidationResults};
pub use state::{Changed, Errors, FormState, Values};
pub use value::FieldValue;
