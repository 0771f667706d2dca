//! Form fields and their validation rules.

use regex::Regex;

/// Accepted email shape: a local part, `@`, then dotted labels (or a bracketed
/// IPv4 prefix) and a short alphabetic or numeric final label.
pub const EMAIL_PATTERN: &str = r"^([a-zA-Z0-9_\-.]+)@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.)|(([a-zA-Z0-9\-]+\.)+))([a-zA-Z]{1,5}|[0-9]{1,3})(\]?)$";

/// Input kind, rendered as the `type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Email,
}

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Missing,
    MalformedEmail,
}

/// A named input and its current raw value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Fields typed as email, or simply named `email`, use the email rule.
    pub fn expects_email(&self) -> bool {
        self.kind == FieldKind::Email || self.name == "email"
    }

    /// Checks the trimmed value against the rule for this field.
    ///
    /// # Errors
    ///
    /// Returns the rule the value broke.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.expects_email() {
            if is_valid_email(&self.value) {
                Ok(())
            } else {
                Err(FieldError::MalformedEmail)
            }
        } else if is_present(&self.value) {
            Ok(())
        } else {
            Err(FieldError::Missing)
        }
    }
}

pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|regex| regex.is_match(value.trim()))
}
