//! Client wrappers for the SecureGate auth endpoints. Each call builds the form
//! body (token first), posts it through a [`Transport`] and classifies the
//! response into a [`SubmissionOutcome`]. Field values are never logged.

use crate::{
    app_lib::{
        BodyEncoding, RawResponse, Transport,
        http::sanitize_body,
    },
    features::{
        auth::{
            context::AuthFormContext,
            types::{ErrorResponse, StatusResponse, SubmissionOutcome, TicketResponse},
        },
        forms::FormValues,
    },
};
use serde::de::DeserializeOwned;
use url::form_urlencoded;

pub const LOGIN_PATH: &str = "/xloginapi/";
pub const LOGOUT_PATH: &str = "/xlogoutapi/";
pub const PASSWORD_RESET_REQUEST_PATH: &str = "/password_reset_request/";
pub const CREATE_TICKET_PATH: &str = "/create_ticket/";
pub const RESET_PASSWORD_PATH: &str = "/reset_password";

/// Shown when a password view answers 200 with neither `error` nor `status: 200`.
const UNEXPECTED_RESPONSE: &str = "Unexpected response from the server.";

/// Posts the login form. Any 2xx means the session cookie is set.
pub async fn login(
    transport: &impl Transport,
    ctx: &AuthFormContext,
    values: &FormValues,
) -> SubmissionOutcome<()> {
    let body = ctx.form_body(BodyEncoding::Multipart, values);
    match transport.post_form(&ctx.url(LOGIN_PATH), &body).await {
        Ok(response) => classify_opaque(&response),
        Err(err) => err.into(),
    }
}

/// Posts a password reset request and returns the server message.
pub async fn request_password_reset(
    transport: &impl Transport,
    ctx: &AuthFormContext,
    values: &FormValues,
) -> SubmissionOutcome<String> {
    let body = ctx.form_body(BodyEncoding::Multipart, values);
    match transport
        .post_form(&ctx.url(PASSWORD_RESET_REQUEST_PATH), &body)
        .await
    {
        Ok(response) => classify_status(&response),
        Err(err) => err.into(),
    }
}

/// Posts the access request form (url-encoded) and returns the ticket reference.
pub async fn create_ticket(
    transport: &impl Transport,
    ctx: &AuthFormContext,
    values: &FormValues,
) -> SubmissionOutcome<String> {
    let body = ctx.form_body(BodyEncoding::UrlEncoded, values);
    match transport.post_form(&ctx.url(CREATE_TICKET_PATH), &body).await {
        Ok(response) => classify_ticket(&response),
        Err(err) => err.into(),
    }
}

/// Ends the server session. The body carries only the token.
pub async fn logout(transport: &impl Transport, ctx: &AuthFormContext) -> SubmissionOutcome<()> {
    let body = ctx.token_body(BodyEncoding::Multipart);
    match transport.post_form(&ctx.url(LOGOUT_PATH), &body).await {
        Ok(response) => classify_opaque(&response),
        Err(err) => err.into(),
    }
}

/// Sets a new password using the token from the reset link.
/// The token travels both in the query string and in the body.
pub async fn reset_password(
    transport: &impl Transport,
    ctx: &AuthFormContext,
    token: &str,
    values: &FormValues,
) -> SubmissionOutcome<String> {
    let mut body = ctx.form_body(BodyEncoding::Multipart, values);
    body.push("token", token);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("token", token)
        .finish();
    let url = format!("{}?{query}", ctx.url(RESET_PASSWORD_PATH));
    match transport.post_form(&url, &body).await {
        Ok(response) => classify_status(&response),
        Err(err) => err.into(),
    }
}

/// Endpoints whose body is not inspected: success is any 2xx.
pub fn classify_opaque(response: &RawResponse) -> SubmissionOutcome<()> {
    if response.ok() {
        SubmissionOutcome::Success(())
    } else {
        transport_error(response)
    }
}

/// `{status: 200, message}` succeeds, `{error}` is a rejection.
pub fn classify_status(response: &RawResponse) -> SubmissionOutcome<String> {
    let parsed: StatusResponse = match decode(response) {
        Ok(parsed) => parsed,
        Err(outcome) => return outcome,
    };

    if let Some(error) = parsed.error {
        SubmissionOutcome::Rejected(error)
    } else if parsed.status == Some(200) {
        SubmissionOutcome::Success(parsed.message.unwrap_or_default())
    } else {
        SubmissionOutcome::Rejected(UNEXPECTED_RESPONSE.to_string())
    }
}

/// `{reference}` succeeds, `{error}` or a missing reference is a rejection.
pub fn classify_ticket(response: &RawResponse) -> SubmissionOutcome<String> {
    let parsed: TicketResponse = match decode(response) {
        Ok(parsed) => parsed,
        Err(outcome) => return outcome,
    };

    match (parsed.reference, parsed.error) {
        (_, Some(error)) => SubmissionOutcome::Rejected(error),
        (Some(reference), None) if !reference.trim().is_empty() => {
            SubmissionOutcome::Success(reference)
        }
        _ => SubmissionOutcome::Rejected("The ticket reference is missing.".to_string()),
    }
}

/// Parses a 2xx body. A non-2xx answer carrying `{error}` is a rejection
/// with the server's text; anything else is a transport error.
fn decode<B: DeserializeOwned, T>(response: &RawResponse) -> Result<B, SubmissionOutcome<T>> {
    if !response.ok() {
        let refusal = serde_json::from_str::<ErrorResponse>(&response.body);
        return Err(match refusal {
            Ok(ErrorResponse { error: Some(error) }) => SubmissionOutcome::Rejected(error),
            _ => transport_error(response),
        });
    }
    serde_json::from_str(&response.body).map_err(|err| SubmissionOutcome::TransportError {
        status: response.status,
        body: format!("Failed to decode response: {err}"),
    })
}

fn transport_error<T>(response: &RawResponse) -> SubmissionOutcome<T> {
    SubmissionOutcome::TransportError {
        status: response.status,
        body: sanitize_body(&response.body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_success_is_any_2xx() {
        assert_eq!(
            classify_opaque(&RawResponse::new(200, "{\"message\": \"Login successful\"}")),
            SubmissionOutcome::Success(())
        );
        assert_eq!(
            classify_opaque(&RawResponse::new(400, " {\"non_field_errors\": [\"bad\"]} ")),
            SubmissionOutcome::TransportError {
                status: 400,
                body: "{\"non_field_errors\": [\"bad\"]}".to_string()
            }
        );
    }

    #[test]
    fn status_body_with_error_is_rejected() {
        let response = RawResponse::new(200, r#"{"status": 400, "error": "Unknown user"}"#);
        assert_eq!(
            classify_status(&response),
            SubmissionOutcome::Rejected("Unknown user".to_string())
        );
    }

    #[test]
    fn status_body_with_200_succeeds() {
        let response = RawResponse::new(200, r#"{"status": 200, "message": "Check your inbox"}"#);
        assert_eq!(
            classify_status(&response),
            SubmissionOutcome::Success("Check your inbox".to_string())
        );
    }

    #[test]
    fn status_body_without_markers_is_unexpected() {
        let response = RawResponse::new(200, "{}");
        assert_eq!(
            classify_status(&response),
            SubmissionOutcome::Rejected(UNEXPECTED_RESPONSE.to_string())
        );
    }

    #[test]
    fn undecodable_body_is_a_transport_error() {
        let response = RawResponse::new(200, "<html>rate limited</html>");
        match classify_status(&response) {
            SubmissionOutcome::TransportError { status, body } => {
                assert_eq!(status, 200);
                assert!(body.starts_with("Failed to decode response"));
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn error_body_on_client_error_status_is_a_rejection() {
        assert_eq!(
            classify_ticket(&RawResponse::new(400, r#"{"error": "Description is required"}"#)),
            SubmissionOutcome::Rejected("Description is required".to_string())
        );
        assert_eq!(
            classify_ticket(&RawResponse::new(405, r#"{"error": "Invalid request method"}"#)),
            SubmissionOutcome::Rejected("Invalid request method".to_string())
        );
        assert_eq!(
            classify_status(&RawResponse::new(400, r#"{"status": 400, "error": "Unknown user"}"#)),
            SubmissionOutcome::Rejected("Unknown user".to_string())
        );
        assert_eq!(
            classify_ticket(&RawResponse::new(400, r#"{"detail": "nope"}"#)),
            SubmissionOutcome::TransportError {
                status: 400,
                body: r#"{"detail": "nope"}"#.to_string()
            }
        );
    }

    #[test]
    fn ticket_reference_is_required() {
        assert_eq!(
            classify_ticket(&RawResponse::new(200, r#"{"reference": "INC-42", "status": "success"}"#)),
            SubmissionOutcome::Success("INC-42".to_string())
        );
        assert_eq!(
            classify_ticket(&RawResponse::new(200, r#"{"reference": " "}"#)),
            SubmissionOutcome::Rejected("The ticket reference is missing.".to_string())
        );
        assert_eq!(
            classify_ticket(&RawResponse::new(200, r#"{"error": "Invalid ticket type"}"#)),
            SubmissionOutcome::Rejected("Invalid ticket type".to_string())
        );
        assert_eq!(
            classify_ticket(&RawResponse::new(500, "")),
            SubmissionOutcome::TransportError {
                status: 500,
                body: "Request failed.".to_string()
            }
        );
    }
}
