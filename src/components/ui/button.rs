use leptos::prelude::*;

/// Full-width form button; disabled while a request is in flight.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <div class="container-login100-form-btn">
            <button
                type=button_type
                class="login100-form-btn"
                class:disabled=move || disabled.get()
                disabled=move || disabled.get()
            >
                {children()}
            </button>
        </div>
    }
}
