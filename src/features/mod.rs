//! Domain-level frontend features. Routes import these modules to keep view
//! code focused while validation, view state and API handling stay testable
//! outside the browser.

pub mod auth;
pub mod forms;
pub mod views;
