//! Inline banners for submission errors and confirmations. The message is
//! rendered as a text node, so server-supplied text cannot inject markup.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => "alert alert-danger text-center",
        AlertKind::Success => "alert alert-success text-center",
    };

    view! { <div class=class role="alert">{message}</div> }
}
