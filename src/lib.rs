//! SecureGate web front end.
//!
//! A client-side rendered Leptos application that drives the SecureGate
//! authentication portal: login, password reset requests, access requests
//! (support tickets), password reset confirmation and logout.
//!
//! The validation, view-switching and response-classification core lives in
//! [`features`] and [`app_lib`] and builds on any target, so it is unit tested
//! on the host. Everything that touches the DOM or the network is compiled
//! for `wasm32` only.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

/// Installs panic and log hooks, then mounts the application on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = app_lib::config::AppConfig::load();
    if let Err(err) = app_lib::telemetry::init(&config.log_level) {
        web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&err.to_string()));
    }
    tracing::info!(
        version = %app_lib::build_info::version_label(),
        "starting securegate web"
    );

    leptos::mount::mount_to_body(app::App);
}
