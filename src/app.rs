use crate::features::auth::state::AuthFormProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthFormProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthFormProvider>
    }
}
