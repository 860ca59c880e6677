mod button;
mod snackbar;
mod spinner;

pub use button::Button;
pub use snackbar::{Snackbar, ToastContext, ToastProvider, use_toast};
pub use spinner::Spinner;
