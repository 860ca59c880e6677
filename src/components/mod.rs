//! Shared UI components exported for routes.

pub mod layout;
pub mod ui;

pub use layout::AppShell;
pub use ui::{Button, Snackbar, Spinner, ToastProvider, use_toast};
