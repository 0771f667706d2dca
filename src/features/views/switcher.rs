//! The view switcher owns the single form container. Rendering a view builds
//! its fragment, arms a fresh submitter and bumps the [`ViewHandle`]; every
//! later interaction must present the handle it was bound to, so handlers and
//! responses belonging to a replaced view are dropped instead of acting on
//! the current one.

use super::{
    fragment::Fragment,
    view::{Confirmation, FormView, ViewEvent},
};
use crate::features::{
    auth::{
        context::CsrfToken,
        flows::failure_message,
        types::{FlowSuccess, SubmissionOutcome},
    },
    forms::{FormValues, SubmitPhase, ValidatedForm},
};

/// Identifies one mounted view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle(u64);

/// Validated values captured for one exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub handle: ViewHandle,
    pub view: FormView,
    pub values: FormValues,
}

/// Effect of an event or a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new view is mounted.
    Rendered(ViewHandle),
    /// Leave the single-page app for this URL.
    Navigate(String),
    /// The current view stays mounted (possibly with an inline error).
    Stay,
    /// Stale handle or no transition for this event.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewSwitcher {
    token: CsrfToken,
    handle: ViewHandle,
    fragment: Fragment,
    form: Option<ValidatedForm>,
}

impl ViewSwitcher {
    /// Mounts the login view.
    pub fn new(token: CsrfToken) -> Self {
        Self::starting_at(token, FormView::default())
    }

    pub fn starting_at(token: CsrfToken, view: FormView) -> Self {
        let fragment = Fragment::build(&view, &token);
        let form = fragment.arm();
        Self {
            token,
            handle: ViewHandle(0),
            fragment,
            form,
        }
    }

    /// Replaces the mounted view and returns its handle.
    pub fn render(&mut self, view: FormView) -> ViewHandle {
        self.handle = ViewHandle(self.handle.0 + 1);
        self.fragment = Fragment::build(&view, &self.token);
        self.form = self.fragment.arm();
        tracing::debug!(view = view.name(), generation = self.handle.0, "view mounted");
        self.handle
    }

    pub fn handle(&self) -> ViewHandle {
        self.handle
    }

    pub fn view(&self) -> &FormView {
        self.fragment.view()
    }

    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    pub fn form(&self) -> Option<&ValidatedForm> {
        self.form.as_ref()
    }

    pub fn is_live(&self, handle: ViewHandle) -> bool {
        self.handle == handle
    }

    /// Applies a link event from the view bound to `handle`.
    pub fn dispatch(&mut self, handle: ViewHandle, event: ViewEvent) -> Transition {
        if !self.is_live(handle) {
            return Transition::Ignored;
        }
        match self.view().next(event) {
            Some(next) => Transition::Rendered(self.render(next)),
            None => Transition::Ignored,
        }
    }

    pub fn set_value(&mut self, handle: ViewHandle, name: &str, value: impl Into<String>) -> bool {
        self.live_form(handle)
            .is_some_and(|form| form.set_value(name, value))
    }

    pub fn focus(&mut self, handle: ViewHandle, name: &str) {
        if let Some(form) = self.live_form(handle) {
            form.focus(name);
        }
    }

    pub fn is_invalid(&self, handle: ViewHandle, name: &str) -> bool {
        self.is_live(handle)
            && self.form.as_ref().is_some_and(|form| form.is_invalid(name))
    }

    pub fn form_error(&self, handle: ViewHandle) -> Option<String> {
        if !self.is_live(handle) {
            return None;
        }
        self.form
            .as_ref()
            .and_then(|form| form.error().map(str::to_string))
    }

    pub fn is_submitting(&self) -> bool {
        self.form
            .as_ref()
            .is_some_and(|form| form.phase() == SubmitPhase::Submitting)
    }

    /// Validates the form bound to `handle`. Returns the submission to send,
    /// or `None` when the handle is stale, a field failed, or a submission is
    /// already in flight.
    pub fn submit(&mut self, handle: ViewHandle) -> Option<Submission> {
        let view = self.view().clone();
        let form = self.live_form(handle)?;
        let mut submission = None;
        form.submit(|values| {
            submission = Some(Submission {
                handle,
                view,
                values,
            });
        });
        submission
    }

    /// Applies the outcome of `submission`. Outcomes for replaced views are ignored.
    pub fn complete(
        &mut self,
        submission: &Submission,
        outcome: SubmissionOutcome<FlowSuccess>,
        app_root: &str,
    ) -> Transition {
        if !self.is_live(submission.handle) {
            tracing::debug!(view = submission.view.name(), "stale outcome ignored");
            return Transition::Ignored;
        }

        let success = match outcome {
            SubmissionOutcome::Success(success) => success,
            failed => {
                let message = failure_message(&submission.view, &failed).unwrap_or_default();
                if let Some(form) = self.form.as_mut() {
                    form.finish(Err(message));
                }
                return Transition::Stay;
            }
        };

        if let Some(form) = self.form.as_mut() {
            form.finish(Ok(()));
        }
        match success {
            FlowSuccess::LoggedIn => Transition::Navigate(app_root.to_string()),
            FlowSuccess::ResetRequested { message } => Transition::Rendered(
                self.render(FormView::TicketResult(Confirmation::reset_requested(message))),
            ),
            FlowSuccess::TicketLogged { reference } => Transition::Rendered(
                self.render(FormView::TicketResult(Confirmation::ticket_logged(reference))),
            ),
            FlowSuccess::PasswordChanged { .. } => Transition::Stay,
        }
    }

    /// Reopens the live form with `message` shown inline. Used when a
    /// successful exchange could not be followed up, so the user can retry.
    pub fn reopen(&mut self, handle: ViewHandle, message: impl Into<String>) {
        if let Some(form) = self.live_form(handle) {
            form.finish(Err(message.into()));
        }
    }

    fn live_form(&mut self, handle: ViewHandle) -> Option<&mut ValidatedForm> {
        if self.is_live(handle) {
            self.form.as_mut()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::forms::FieldError;

    fn switcher() -> ViewSwitcher {
        ViewSwitcher::new(CsrfToken::new("tok"))
    }

    #[test]
    fn starts_on_login() {
        let switcher = switcher();
        assert_eq!(switcher.view(), &FormView::Login);
        assert!(switcher.form().is_some());
    }

    #[test]
    fn links_follow_the_transition_table() {
        let mut switcher = switcher();
        let login = switcher.handle();

        let Transition::Rendered(reset) = switcher.dispatch(login, ViewEvent::ForgotPassword)
        else {
            panic!("expected a render");
        };
        assert_eq!(switcher.view(), &FormView::PasswordReset);

        assert_eq!(
            switcher.dispatch(reset, ViewEvent::RequestAccess),
            Transition::Ignored
        );
        assert!(matches!(
            switcher.dispatch(reset, ViewEvent::BackToLogin),
            Transition::Rendered(_)
        ));
        assert_eq!(switcher.view(), &FormView::Login);
    }

    #[test]
    fn rerendering_the_same_view_detaches_old_handlers() {
        let mut switcher = switcher();
        let first = switcher.handle();
        switcher.set_value(first, "username", "bob");

        let second = switcher.render(FormView::Login);

        assert_ne!(first, second);
        assert_eq!(switcher.form().and_then(|form| form.value("username")), Some(""));
        assert!(!switcher.set_value(first, "username", "mallory"));
        assert_eq!(switcher.submit(first), None);
        assert_eq!(
            switcher.dispatch(first, ViewEvent::ForgotPassword),
            Transition::Ignored
        );
        assert_eq!(switcher.view(), &FormView::Login);
    }

    #[test]
    fn invalid_login_marks_password_and_yields_nothing() {
        let mut switcher = switcher();
        let handle = switcher.handle();
        switcher.set_value(handle, "username", "bob");

        assert_eq!(switcher.submit(handle), None);
        assert!(switcher.is_invalid(handle, "password"));
        assert!(!switcher.is_invalid(handle, "username"));
        assert_eq!(
            switcher.form().and_then(|form| form.marker("password")),
            Some(FieldError::Missing)
        );

        switcher.focus(handle, "password");
        assert!(!switcher.is_invalid(handle, "password"));
    }

    #[test]
    fn double_submit_yields_one_submission() {
        let mut switcher = switcher();
        let handle = switcher.handle();
        switcher.set_value(handle, "username", "bob");
        switcher.set_value(handle, "password", "pw");

        assert!(switcher.submit(handle).is_some());
        assert!(switcher.is_submitting());
        assert_eq!(switcher.submit(handle), None);
    }

    #[test]
    fn leaving_a_view_mid_request_frees_the_new_form() {
        let mut switcher = ViewSwitcher::starting_at(CsrfToken::new("tok"), FormView::PasswordReset);
        let handle = switcher.handle();
        switcher.set_value(handle, "username", "bob");
        switcher.set_value(handle, "email", "bob@example.org");
        assert!(switcher.submit(handle).is_some());
        assert!(switcher.is_submitting());

        let Transition::Rendered(login) = switcher.dispatch(handle, ViewEvent::BackToLogin) else {
            panic!("expected a render");
        };

        assert!(!switcher.is_submitting());
        switcher.set_value(login, "username", "bob");
        switcher.set_value(login, "password", "pw");
        assert!(switcher.submit(login).is_some());
    }

    #[test]
    fn reopen_after_login_allows_another_attempt() {
        let mut switcher = switcher();
        let handle = switcher.handle();
        switcher.set_value(handle, "username", "bob");
        switcher.set_value(handle, "password", "pw");
        let submission = switcher.submit(handle).unwrap();
        switcher.complete(&submission, SubmissionOutcome::Success(FlowSuccess::LoggedIn), "/");
        assert_eq!(switcher.submit(handle), None);

        switcher.reopen(handle, "The application could not be opened.");

        assert_eq!(
            switcher.form_error(handle).as_deref(),
            Some("The application could not be opened.")
        );
        assert!(switcher.submit(handle).is_some());
    }

    #[test]
    fn reopen_ignores_stale_handles() {
        let mut switcher = switcher();
        let stale = switcher.handle();
        let live = switcher.render(FormView::Login);

        switcher.reopen(stale, "late");

        assert_eq!(switcher.form_error(live), None);
    }

    #[test]
    fn successful_login_navigates_to_app_root() {
        let mut switcher = switcher();
        let handle = switcher.handle();
        switcher.set_value(handle, "username", "bob");
        switcher.set_value(handle, "password", "pw");
        let submission = switcher.submit(handle).unwrap();

        let transition =
            switcher.complete(&submission, SubmissionOutcome::Success(FlowSuccess::LoggedIn), "/");

        assert_eq!(transition, Transition::Navigate("/".to_string()));
        assert_eq!(switcher.view(), &FormView::Login);
    }

    #[test]
    fn ticket_success_mounts_result_view() {
        let mut switcher = ViewSwitcher::starting_at(CsrfToken::new("tok"), FormView::AccessRequest);
        let handle = switcher.handle();
        switcher.set_value(handle, "ticket_type", "incident");
        switcher.set_value(handle, "email", "ann@example.org");
        let submission = switcher.submit(handle).unwrap();
        assert_eq!(
            submission.values.get("description"),
            Some("Name: \nContact Number: \nQuery information: \n")
        );

        let transition = switcher.complete(
            &submission,
            SubmissionOutcome::Success(FlowSuccess::TicketLogged {
                reference: "INC-20240601-0003".to_string(),
            }),
            "/",
        );

        assert!(matches!(transition, Transition::Rendered(_)));
        assert!(switcher.fragment().contains_text("Your query reference: INC-20240601-0003"));
        assert!(switcher.form().is_none());
    }

    #[test]
    fn outcome_for_replaced_view_is_ignored() {
        let mut switcher = ViewSwitcher::starting_at(CsrfToken::new("tok"), FormView::PasswordReset);
        let handle = switcher.handle();
        switcher.set_value(handle, "username", "bob");
        switcher.set_value(handle, "email", "bob@example.org");
        let submission = switcher.submit(handle).unwrap();

        switcher.dispatch(handle, ViewEvent::BackToLogin);
        let transition = switcher.complete(
            &submission,
            SubmissionOutcome::Success(FlowSuccess::ResetRequested {
                message: "Check your inbox".to_string(),
            }),
            "/",
        );

        assert_eq!(transition, Transition::Ignored);
        assert_eq!(switcher.view(), &FormView::Login);
    }

    #[test]
    fn failures_reopen_the_form_with_a_visible_message() {
        let mut switcher = ViewSwitcher::starting_at(CsrfToken::new("tok"), FormView::AccessRequest);
        let handle = switcher.handle();
        switcher.set_value(handle, "ticket_type", "request");
        switcher.set_value(handle, "email", "ann@example.org");
        let submission = switcher.submit(handle).unwrap();

        let transition = switcher.complete(
            &submission,
            SubmissionOutcome::TransportError {
                status: 500,
                body: "Server Error".to_string(),
            },
            "/",
        );

        assert_eq!(transition, Transition::Stay);
        assert_eq!(
            switcher.form_error(handle).as_deref(),
            Some("Error 500 : Server Error")
        );
        assert!(!switcher.is_submitting());
        assert!(switcher.submit(handle).is_some());
    }
}
