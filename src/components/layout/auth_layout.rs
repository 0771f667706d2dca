use leptos::prelude::*;

/// Centered card with the portal artwork; every auth route renders inside it.
#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="limiter">
            <div class="container-login100">
                <div class="wrap-login100">
                    <div class="login100-pic">
                        <img src="/static/images/img-01.png" alt="SecureGate" />
                    </div>
                    <div class="login100-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}
