//! Page chrome shared by the auth routes.

mod auth_layout;

pub(crate) use auth_layout::AuthLayout;
