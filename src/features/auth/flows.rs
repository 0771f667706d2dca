//! Async orchestration of the auth flows. Routes hand over a validated
//! [`Submission`]; the flow performs the exchange and returns an outcome the
//! view switcher applies. Logout and password-reset confirmation live here too.
//!
//! Every failure becomes a visible message through [`failure_message`]; the
//! ticket flow used to fail silently and no longer does.

use crate::{
    app_lib::{
        AppError, Transport,
        cookies::{CookieJar, clear_all_cookies},
        navigation::Navigator,
    },
    features::{
        auth::{
            client,
            context::AuthFormContext,
            types::{FlowSuccess, SubmissionOutcome},
        },
        forms::FormValues,
        views::{FormView, Submission},
    },
};

/// Fixed login failure text; the server's reason is not shown.
pub const LOGIN_FAILED: &str = "Could not log you in with the provided credentials";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
pub const TOKEN_MISSING: &str = "Token is missing.";
/// Shown when login succeeded but the application page could not be opened.
pub const APP_UNREACHABLE: &str =
    "You are logged in, but the application could not be opened. Please try again.";

/// Runs the exchange for the view the submission came from.
pub async fn submit(
    transport: &impl Transport,
    ctx: &AuthFormContext,
    submission: &Submission,
) -> SubmissionOutcome<FlowSuccess> {
    let outcome = match &submission.view {
        FormView::Login => client::login(transport, ctx, &submission.values)
            .await
            .map(|()| FlowSuccess::LoggedIn),
        FormView::PasswordReset => {
            client::request_password_reset(transport, ctx, &submission.values)
                .await
                .map(|message| FlowSuccess::ResetRequested { message })
        }
        FormView::AccessRequest => client::create_ticket(transport, ctx, &submission.values)
            .await
            .map(|reference| FlowSuccess::TicketLogged { reference }),
        FormView::TicketResult(_) => {
            SubmissionOutcome::Rejected("This view has nothing to submit.".to_string())
        }
    };

    log_outcome(submission.view.name(), &outcome);
    outcome
}

/// User-facing text for a failed outcome, `None` on success.
pub fn failure_message<T>(view: &FormView, outcome: &SubmissionOutcome<T>) -> Option<String> {
    match outcome {
        SubmissionOutcome::Success(_) => None,
        _ if *view == FormView::Login => Some(LOGIN_FAILED.to_string()),
        other => failure_text(other),
    }
}

/// Server text for a failed outcome: the rejection reason, or
/// `Error {status} : {body}` when the request itself failed.
pub fn failure_text<T>(outcome: &SubmissionOutcome<T>) -> Option<String> {
    match outcome {
        SubmissionOutcome::Success(_) => None,
        SubmissionOutcome::Rejected(message) => Some(message.clone()),
        SubmissionOutcome::TransportError { status: 0, body } => Some(body.clone()),
        SubmissionOutcome::TransportError { status, body } => {
            Some(format!("Error {status} : {body}"))
        }
    }
}

/// Logs out on the server, then expires every visible cookie and opens the
/// auth entry point whether or not the server call succeeded.
///
/// # Errors
///
/// Returns an error only if the final navigation fails.
pub async fn logout(
    transport: &impl Transport,
    ctx: &AuthFormContext,
    jar: &impl CookieJar,
    navigator: &impl Navigator,
) -> Result<(), AppError> {
    let outcome = client::logout(transport, ctx).await;
    log_outcome("logout", &outcome);

    clear_all_cookies(jar);
    navigator.navigate(&ctx.config.auth_entry)
}

/// Submits the new password from the reset link page. Mismatched passwords and
/// a missing token are rejected before any request is made.
pub async fn confirm_password_reset(
    transport: &impl Transport,
    ctx: &AuthFormContext,
    token: &str,
    values: &FormValues,
) -> SubmissionOutcome<FlowSuccess> {
    if token.trim().is_empty() {
        return SubmissionOutcome::Rejected(TOKEN_MISSING.to_string());
    }
    if values.get("password") != values.get("confirm_password") {
        return SubmissionOutcome::Rejected(PASSWORDS_DO_NOT_MATCH.to_string());
    }

    let outcome = client::reset_password(transport, ctx, token, values)
        .await
        .map(|message| FlowSuccess::PasswordChanged { message });
    log_outcome("reset_password", &outcome);
    outcome
}

fn log_outcome<T>(flow: &str, outcome: &SubmissionOutcome<T>) {
    match outcome {
        SubmissionOutcome::Success(_) => tracing::info!(flow, "request succeeded"),
        SubmissionOutcome::Rejected(reason) => {
            tracing::warn!(flow, reason = %reason, "request rejected");
        }
        SubmissionOutcome::TransportError { status, .. } => {
            tracing::warn!(flow, status, "request failed");
        }
    }
}
