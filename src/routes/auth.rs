//! The auth entry page: one form container switching between login, password
//! reset request, access request and the ticket confirmation.

use crate::app_lib::{api::BrowserTransport, navigation::{Navigator, WindowNavigator}};
use crate::components::{AuthLayout, FormFragment, Spinner};
use crate::features::auth::{flows, state::use_auth_form};
use crate::features::views::{Submission, Transition, ViewSwitcher};
use leptos::prelude::*;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_auth_form();
    let app_root = ctx.config.app_root.clone();
    let switcher = RwSignal::new(ViewSwitcher::new(ctx.csrf.clone()));
    let handle = Memo::new(move |_| switcher.with(ViewSwitcher::handle));

    let submit_action = Action::new_local(move |submission: &Submission| {
        let submission = submission.clone();
        let ctx = ctx.clone();
        async move {
            let outcome = flows::submit(&BrowserTransport, &ctx, &submission).await;
            (submission, outcome)
        }
    });

    Effect::new(move |_| {
        let Some((submission, outcome)) = submit_action.value().get() else {
            return;
        };
        let mut transition = Transition::Ignored;
        switcher.update(|switcher| {
            transition = switcher.complete(&submission, outcome, &app_root);
        });
        if let Transition::Navigate(url) = transition {
            if let Err(err) = WindowNavigator.navigate(&url) {
                tracing::error!(error = %err, "navigation after login failed");
                switcher.update(|switcher| {
                    switcher.reopen(submission.handle, flows::APP_UNREACHABLE);
                });
            }
        }
    });

    let on_submit = Callback::new(move |submission: Submission| {
        submit_action.dispatch(submission);
    });
    // Tracks the mounted form only; a request left behind by a replaced view
    // does not block the new one.
    let pending = Signal::derive(move || switcher.with(ViewSwitcher::is_submitting));

    view! {
        <AuthLayout>
            {move || {
                let handle = handle.get();
                view! {
                    <FormFragment
                        switcher=switcher
                        handle=handle
                        on_submit=on_submit
                        pending=pending
                    />
                }
            }}
            {move || {
                pending
                    .get()
                    .then_some(view! { <div class="text-center p-t-12"><Spinner /></div> })
            }}
        </AuthLayout>
    }
}
