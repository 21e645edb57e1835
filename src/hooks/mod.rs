pub mod use_session_status;
pub mod use_toast;

pub use use_session_status::{use_api, use_session_status};
pub use use_toast::{use_toast, ToastKind, ToastMessage, UseToastHandle};
