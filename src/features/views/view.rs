/// Text of a post-submission confirmation fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub headline: String,
    pub detail: String,
}

impl Confirmation {
    /// Password reset request accepted; `message` comes from the server.
    pub fn reset_requested(message: impl Into<String>) -> Self {
        Self {
            headline: "Request Successful!".to_string(),
            detail: message.into(),
        }
    }

    /// Access request or incident logged under `reference`.
    pub fn ticket_logged(reference: impl AsRef<str>) -> Self {
        Self {
            headline: "Query Logged Successfully!".to_string(),
            detail: format!("Your query reference: {}", reference.as_ref()),
        }
    }
}

/// The view mounted in the form container. Exactly one is mounted at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormView {
    #[default]
    Login,
    PasswordReset,
    AccessRequest,
    TicketResult(Confirmation),
}

/// User actions that switch views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    ForgotPassword,
    RequestAccess,
    BackToLogin,
}

impl FormView {
    /// Transition table for link-driven events. Unlisted pairs are ignored.
    pub fn next(&self, event: ViewEvent) -> Option<FormView> {
        match (self, event) {
            (FormView::Login, ViewEvent::ForgotPassword) => Some(FormView::PasswordReset),
            (FormView::Login, ViewEvent::RequestAccess) => Some(FormView::AccessRequest),
            (
                FormView::PasswordReset | FormView::AccessRequest | FormView::TicketResult(_),
                ViewEvent::BackToLogin,
            ) => Some(FormView::Login),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormView::Login => "login",
            FormView::PasswordReset => "password_reset",
            FormView::AccessRequest => "access_request",
            FormView::TicketResult(_) => "ticket_result",
        }
    }
}
