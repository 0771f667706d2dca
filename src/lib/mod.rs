//! Shared frontend utilities: configuration, errors, HTTP plumbing, cookies,
//! navigation, logging and build metadata.
//!
//! ## Request model
//!
//! Every SecureGate endpoint is a Django view protected by CSRF middleware.
//! Requests are form posts (multipart, or url-encoded for ticket creation)
//! that always carry the `csrfmiddlewaretoken` field. Responses are either
//! opaque (login, logout) or small JSON documents with `status`, `message`,
//! `error` or `reference` keys.
//!
//! The browser-bound pieces (`api`, `DocumentCookies`, `WindowNavigator`) are
//! only compiled for `wasm32`; the traits they implement let the flows run
//! against in-memory fakes on the host. Callers must not log passwords or
//! token values.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod build_info;
pub mod config;
pub mod cookies;
pub mod errors;
pub mod http;
pub mod navigation;
pub mod telemetry;

pub use errors::AppError;
pub use http::{BodyEncoding, FormBody, RawResponse, Transport};
