//! Renders the mounted view's node list inside the form container. Every
//! handler is bound to the [`ViewHandle`] it was rendered with; once the
//! switcher moves on, events from the old DOM are dropped by the switcher.

use crate::components::{Alert, AlertKind, Button};
use crate::features::auth::context::CSRF_FIELD;
use crate::features::views::{FieldSpec, Node, Submission, ViewHandle, ViewSwitcher, Widget};
use leptos::ev::{Event, FocusEvent, SubmitEvent};
use leptos::prelude::*;

#[component]
pub fn FormFragment(
    switcher: RwSignal<ViewSwitcher>,
    handle: ViewHandle,
    on_submit: Callback<Submission>,
    #[prop(into)] pending: Signal<bool>,
) -> impl IntoView {
    let nodes = switcher.with_untracked(|switcher| switcher.fragment().nodes().to_vec());

    let submit = move |event: SubmitEvent| {
        event.prevent_default();
        let mut submission = None;
        switcher.update(|switcher| submission = switcher.submit(handle));
        if let Some(submission) = submission {
            on_submit.run(submission);
        }
    };

    view! {
        <form class="login100-form validate-form" novalidate on:submit=submit>
            {nodes
                .into_iter()
                .map(|node| node_view(switcher, handle, pending, node))
                .collect_view()}
        </form>
    }
}

fn node_view(
    switcher: RwSignal<ViewSwitcher>,
    handle: ViewHandle,
    pending: Signal<bool>,
    node: Node,
) -> AnyView {
    match node {
        Node::Token(token) => {
            view! { <input type="hidden" name=CSRF_FIELD value=token.as_str().to_string() /> }
                .into_any()
        }
        Node::Title(text) => view! { <span class="login100-form-title">{text}</span> }.into_any(),
        Node::Note(text) => view! { <p class="txt1 text-center p-b-20">{text}</p> }.into_any(),
        Node::Success(text) => view! { <Alert kind=AlertKind::Success message=text /> }.into_any(),
        Node::Field(spec) => field_view(switcher, handle, spec),
        Node::ErrorSlot => view! {
            {move || {
                switcher
                    .with(|switcher| switcher.form_error(handle))
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
        }
        .into_any(),
        Node::Submit(label) => {
            view! { <Button button_type="submit" disabled=pending>{label}</Button> }.into_any()
        }
        Node::Link { lead, label, event } => {
            let follow = move |_| {
                switcher.update(|switcher| {
                    switcher.dispatch(handle, event);
                });
            };
            view! {
                <div class="text-center p-t-12">
                    {lead.map(|lead| view! { <span class="txt1">{lead}" "</span> })}
                    <button type="button" class="txt2 btn-link" on:click=follow>
                        {label}
                    </button>
                </div>
            }
            .into_any()
        }
    }
}

fn field_view(switcher: RwSignal<ViewSwitcher>, handle: ViewHandle, spec: FieldSpec) -> AnyView {
    let name = spec.name;
    let invalid = move || switcher.with(|switcher| switcher.is_invalid(handle, name));
    let on_focus = move |_: FocusEvent| switcher.update(|switcher| switcher.focus(handle, name));
    let on_input = move |event: Event| {
        let value = event_target_value(&event);
        switcher.update(|switcher| {
            switcher.set_value(handle, name, value);
        });
    };

    let initial = spec.initial;
    let control = match spec.widget {
        Widget::Input => view! {
            <input
                class="input100"
                type=spec.kind.input_type()
                name=name
                placeholder=spec.placeholder
                prop:value=initial
                on:focus=on_focus
                on:input=on_input
            />
        }
        .into_any(),
        Widget::Select(options) => view! {
            <select class="input100" name=name on:focus=on_focus on:change=on_input>
                {options
                    .into_iter()
                    .map(|option| {
                        let selected = option.value == initial;
                        view! {
                            <option value=option.value selected=selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        Widget::TextArea => view! {
            <textarea
                class="input100"
                name=name
                rows="5"
                prop:value=initial
                on:focus=on_focus
                on:input=on_input
            ></textarea>
        }
        .into_any(),
    };

    view! {
        <div
            class="wrap-input100 validate-input"
            class:alert-validate=invalid
            data-validate=spec.hint
        >
            {control}
            <span class="focus-input100"></span>
            {spec.icon.map(|icon| view! {
                <span class="symbol-input100">
                    <i class=format!("fa {icon}") aria-hidden="true"></i>
                </span>
            })}
        </div>
    }
    .into_any()
}
