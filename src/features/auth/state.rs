//! Leptos context for the auth forms. The provider builds the
//! [`AuthFormContext`] once on mount, reading the anti-forgery token from the
//! server-rendered page, and routes fetch it with [`use_auth_form`].

use crate::{
    app_lib::config::AppConfig,
    features::auth::context::{AuthFormContext, read_csrf_token},
};
use leptos::prelude::*;

/// Provides the auth form context to every route.
#[component]
pub fn AuthFormProvider(children: Children) -> impl IntoView {
    provide_context(AuthFormContext::new(AppConfig::load(), read_csrf_token()));

    view! { {children()} }
}

/// Returns the provided context, or builds one from the page.
pub fn use_auth_form() -> AuthFormContext {
    use_context::<AuthFormContext>()
        .unwrap_or_else(|| AuthFormContext::new(AppConfig::load(), read_csrf_token()))
}
