//! The single form container: which view is mounted, how it is laid out,
//! and how link events and completed exchanges move between views.

pub mod fragment;
pub mod switcher;
pub mod view;

pub use fragment::{FieldSpec, Fragment, Node, Widget};
pub use switcher::{Submission, Transition, ViewHandle, ViewSwitcher};
pub use view::{Confirmation, FormView, ViewEvent};
