mod activation_view;
mod login_view;
mod register_view;

pub use activation_view::*;
pub use login_view::*;
pub use register_view::*;
