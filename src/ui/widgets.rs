//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; they take generic Message
//! types or plain data.

pub mod form_field;
mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
