//! Ends the session: server logout, cookie sweep, then a full reload of the
//! auth entry page.

use crate::app_lib::{api::BrowserTransport, cookies::DocumentCookies, navigation::WindowNavigator};
use crate::components::{AuthLayout, Spinner};
use crate::features::auth::{flows, state::use_auth_form};
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn LogoutPage() -> impl IntoView {
    let ctx = use_auth_form();

    spawn_local(async move {
        if let Err(err) =
            flows::logout(&BrowserTransport, &ctx, &DocumentCookies, &WindowNavigator).await
        {
            tracing::error!(error = %err, "redirect after logout failed");
        }
    });

    view! {
        <AuthLayout>
            <div class="text-center">
                <Spinner />
                <p class="txt1 p-t-12">"Signing you out..."</p>
            </div>
        </AuthLayout>
    }
}
