mod auth;
mod logout;
mod not_found;
mod reset_password;

pub(crate) use auth::AuthPage;
pub(crate) use logout::LogoutPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use reset_password::ResetPasswordPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/auth") view=AuthPage />
            <Route path=path!("/reset_password") view=ResetPasswordPage />
            <Route path=path!("/logout") view=LogoutPage />
        </Routes>
    }
}
