//! Shared UI components exported for routes.

pub(crate) mod form_fragment;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use form_fragment::FormFragment;
pub(crate) use layout::AuthLayout;
pub(crate) use ui::{Alert, AlertKind, Button, Spinner};
