//! Validated submitter: runs every field's rule on submit, marks all failing
//! fields at once, and hands the collected values to a completion callback
//! only when the whole form passes. It also tracks whether a submission is
//! in flight so a double submit cannot dispatch twice.

use super::field::{Field, FieldError};
use std::collections::BTreeMap;

/// Lifecycle of one armed form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Done,
}

/// What a call to [`ValidatedForm::submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// All fields passed and the callback ran.
    Dispatched,
    /// These fields failed and are now marked.
    Invalid(Vec<String>),
    /// A previous submission has not completed yet.
    InFlight,
    /// The form already completed successfully.
    Closed,
}

/// Field values captured at submit time, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// An armed form: its fields, their error markers, the submit phase and the
/// inline error shown near the submit control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatedForm {
    fields: Vec<Field>,
    markers: BTreeMap<String, FieldError>,
    phase: SubmitPhase,
    error: Option<String>,
}

impl ValidatedForm {
    pub fn arm(fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    /// Stores the latest input; unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Clears the error marker of `name` without re-validating it.
    pub fn focus(&mut self, name: &str) {
        self.markers.remove(name);
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.markers.contains_key(name)
    }

    pub fn marker(&self, name: &str) -> Option<FieldError> {
        self.markers.get(name).copied()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates every field and runs `on_valid` once if all of them pass.
    pub fn submit(&mut self, on_valid: impl FnOnce(FormValues)) -> SubmitAttempt {
        match self.phase {
            SubmitPhase::Submitting => return SubmitAttempt::InFlight,
            SubmitPhase::Done => return SubmitAttempt::Closed,
            SubmitPhase::Idle => {}
        }

        let mut failed = Vec::new();
        for field in &self.fields {
            if let Err(err) = field.validate() {
                self.markers.insert(field.name.clone(), err);
                failed.push(field.name.clone());
            }
        }
        if !failed.is_empty() {
            tracing::debug!(fields = ?failed, "form validation failed");
            return SubmitAttempt::Invalid(failed);
        }

        self.phase = SubmitPhase::Submitting;
        self.error = None;
        on_valid(
            self.fields
                .iter()
                .map(|field| (field.name.clone(), field.value.clone()))
                .collect(),
        );
        SubmitAttempt::Dispatched
    }

    /// Records the result of the exchange started by the last submit.
    /// Failures reopen the form with `message` shown inline.
    pub fn finish(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Done;
                self.error = None;
            }
            Err(message) => {
                self.phase = SubmitPhase::Idle;
                self.error = Some(message);
            }
        }
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
