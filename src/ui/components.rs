//! UI Components module - desk chrome
//!
//! Components combine widgets with application logic and are the only layer
//! besides pages that imports from `crate::app`.

pub mod footer;
pub mod nav_bar;

pub use nav_bar::NavItem;
