//! Fallback for unknown paths.

use crate::components::AuthLayout;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthLayout>
            <div class="text-center">
                <span class="login100-form-title">"Page not found"</span>
                <p class="txt1 p-b-20">"The page you requested does not exist."</p>
                <A href="/auth" {..} class="txt2">
                    "Go to login"
                </A>
            </div>
        </AuthLayout>
    }
}
