//! Request outcomes and response bodies for the SecureGate auth endpoints.
//! Responses may echo usernames but never credentials; still, do not log
//! whole bodies.

use crate::app_lib::AppError;
use serde::Deserialize;

/// Result of one network exchange, as seen by the views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome<T> {
    Success(T),
    /// Well-formed response refusing the request (bad credentials, unknown user).
    Rejected(String),
    /// No usable response: HTTP error status, undecodable body, or no response
    /// at all (`status == 0`).
    TransportError { status: u16, body: String },
}

impl<T> SubmissionOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SubmissionOutcome<U> {
        match self {
            SubmissionOutcome::Success(value) => SubmissionOutcome::Success(f(value)),
            SubmissionOutcome::Rejected(message) => SubmissionOutcome::Rejected(message),
            SubmissionOutcome::TransportError { status, body } => {
                SubmissionOutcome::TransportError { status, body }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }
}

impl<T> From<AppError> for SubmissionOutcome<T> {
    fn from(err: AppError) -> Self {
        let status = err.status();
        let body = match err {
            AppError::Http { message, .. } => message,
            other => other.to_string(),
        };
        SubmissionOutcome::TransportError { status, body }
    }
}

/// What a successful flow produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowSuccess {
    LoggedIn,
    ResetRequested { message: String },
    TicketLogged { reference: String },
    PasswordChanged { message: String },
}

/// `{status, message}` / `{status, error}` body used by the password views.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The `{error}` part of a refusal, whatever the status code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

/// Body returned by ticket creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TicketResponse {
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_response_ignores_textual_status() {
        let parsed: TicketResponse =
            serde_json::from_str(r#"{"reference": "REQ-20240101-0001", "status": "success"}"#)
                .expect("Failed to deserialize");
        assert_eq!(parsed.reference.as_deref(), Some("REQ-20240101-0001"));
        assert_eq!(parsed.error, None);
    }

    #[test]
    fn status_response_reads_error_bodies() {
        let parsed: StatusResponse =
            serde_json::from_str(r#"{"status": 400, "error": "Invalid username or email"}"#)
                .expect("Failed to deserialize");
        assert_eq!(parsed.status, Some(400));
        assert_eq!(parsed.error.as_deref(), Some("Invalid username or email"));
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn app_errors_become_transport_errors() {
        let outcome: SubmissionOutcome<()> = AppError::Http {
            status: 429,
            message: "Too many requests".to_string(),
        }
        .into();
        assert_eq!(
            outcome,
            SubmissionOutcome::TransportError {
                status: 429,
                body: "Too many requests".to_string()
            }
        );

        let offline: SubmissionOutcome<()> = AppError::Network("offline".to_string()).into();
        assert_eq!(
            offline,
            SubmissionOutcome::TransportError {
                status: 0,
                body: "Network error: offline".to_string()
            }
        );
    }
}
