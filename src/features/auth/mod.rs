//! Auth feature module: endpoint client, response classification, flow
//! orchestration and the anti-forgery context. It keeps network logic out of
//! the views and must not log passwords or token values.
//!
//! Flow Overview: Login posts the credentials and, on success, leaves the
//! single-page app for the application root. The password reset request and
//! the access request each log a ticket on the server and end on a
//! confirmation fragment. Logout posts the token, expires every visible cookie
//! and returns to the auth entry point regardless of the server answer. The
//! reset link page sets a new password with the mailed token.

pub mod client;
pub mod context;
pub mod flows;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub mod types;

pub use context::{AuthFormContext, CsrfToken};
pub use types::{FlowSuccess, SubmissionOutcome};
