//! Client-side form validation and submission.
//!
//! A form is armed from its fields, collects input, and on submit either marks
//! the failing fields or produces the values for exactly one network exchange.

pub mod field;
pub mod submitter;

pub use field::{Field, FieldError, FieldKind};
pub use submitter::{FormValues, SubmitAttempt, SubmitPhase, ValidatedForm};
