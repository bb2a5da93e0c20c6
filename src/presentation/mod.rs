pub mod copy;
pub mod toast;

pub use toast::{Toast, ToastKind, ToastQueue, ToastSpec, download_toast, rejection_toast};
