use leptos::prelude::*;

/// Busy indicator shown while a form post is in flight.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Please wait".to_string());

    view! {
        <div class="spinner-border text-primary" role="status" aria-live="polite">
            <span class="sr-only">{label}</span>
        </div>
    }
}
