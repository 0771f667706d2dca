//! Landing page of the password reset link. The token arrives in the query
//! string; the new password is checked locally before anything is sent.

use crate::app_lib::api::BrowserTransport;
use crate::components::{Alert, AlertKind, AuthLayout, Button, Spinner};
use crate::features::auth::{
    flows::{self, TOKEN_MISSING},
    state::use_auth_form,
    types::{FlowSuccess, SubmissionOutcome},
};
use crate::features::forms::{Field, FieldKind, FormValues, ValidatedForm};
use leptos::ev::{Event, FocusEvent, SubmitEvent};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[derive(Clone, Debug, PartialEq)]
enum ResetStatus {
    Editing,
    Changed(String),
}

const FIELDS: [(&str, FieldKind, &str, &str); 3] = [
    ("username", FieldKind::Text, "Username", "Valid username is required"),
    ("password", FieldKind::Password, "New password", "Password is required"),
    (
        "confirm_password",
        FieldKind::Password,
        "Confirm password",
        "Please confirm the password",
    ),
];

fn reset_form() -> ValidatedForm {
    ValidatedForm::arm(FIELDS.iter().map(|(name, kind, _, _)| Field::new(*name, *kind)))
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ctx = use_auth_form();
    let token = use_query_map()
        .with_untracked(|query| query.get("token"))
        .unwrap_or_default();
    let has_token = !token.trim().is_empty();
    let auth_entry = ctx.config.auth_entry.clone();

    let form = RwSignal::new(reset_form());
    let (status, set_status) = signal(ResetStatus::Editing);

    let reset_action = Action::new_local(move |values: &FormValues| {
        let values = values.clone();
        let ctx = ctx.clone();
        let token = token.clone();
        async move { flows::confirm_password_reset(&BrowserTransport, &ctx, &token, &values).await }
    });

    Effect::new(move |_| {
        let Some(outcome) = reset_action.value().get() else {
            return;
        };
        match outcome {
            SubmissionOutcome::Success(FlowSuccess::PasswordChanged { message }) => {
                form.update(|form| form.finish(Ok(())));
                set_status.set(ResetStatus::Changed(message));
            }
            other => {
                let message = flows::failure_text(&other).unwrap_or_default();
                form.update(|form| form.finish(Err(message)));
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let mut values = None;
        form.update(|form| {
            form.submit(|submitted| values = Some(submitted));
        });
        if let Some(values) = values {
            reset_action.dispatch(values);
        }
    };
    let pending = reset_action.pending();

    view! {
        <AuthLayout>
            <span class="login100-form-title">"Reset password"</span>
            {move || match (has_token, status.get()) {
                (false, _) => view! { <Alert kind=AlertKind::Error message=TOKEN_MISSING /> }
                    .into_any(),
                (true, ResetStatus::Changed(message)) => view! {
                    <Alert kind=AlertKind::Success message=message />
                    <div class="text-center p-t-12">
                        <a class="txt2" href=auth_entry.clone()>"Go back to login"</a>
                    </div>
                }
                .into_any(),
                (true, ResetStatus::Editing) => view! {
                    <form class="login100-form validate-form" novalidate on:submit=on_submit>
                        {FIELDS
                            .iter()
                            .map(|&(name, kind, placeholder, hint)| {
                                password_field(form, name, kind, placeholder, hint)
                            })
                            .collect_view()}
                        {move || {
                            form.with(|form| form.error().map(str::to_string))
                                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                        }}
                        <Button button_type="submit" disabled=pending>"Change password"</Button>
                    </form>
                }
                .into_any(),
            }}
            {move || {
                pending
                    .get()
                    .then_some(view! { <div class="text-center p-t-12"><Spinner /></div> })
            }}
        </AuthLayout>
    }
}

fn password_field(
    form: RwSignal<ValidatedForm>,
    name: &'static str,
    kind: FieldKind,
    placeholder: &'static str,
    hint: &'static str,
) -> impl IntoView {
    let icon = match kind {
        FieldKind::Password => "fa fa-lock",
        _ => "fa fa-user",
    };

    view! {
        <div
            class="wrap-input100 validate-input"
            class:alert-validate=move || form.with(|form| form.is_invalid(name))
            data-validate=hint
        >
            <input
                class="input100"
                type=kind.input_type()
                name=name
                placeholder=placeholder
                on:focus=move |_: FocusEvent| form.update(|form| form.focus(name))
                on:input=move |event: Event| {
                    let value = event_target_value(&event);
                    form.update(|form| {
                        form.set_value(name, value);
                    });
                }
            />
            <span class="focus-input100"></span>
            <span class="symbol-input100">
                <i class=icon aria-hidden="true"></i>
            </span>
        </div>
    }
}
