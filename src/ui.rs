//! UI module for the registration desk
//! Green event branding with a light default theme
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): canvas programs with no app knowledge
//! - **Widgets** (`widgets`): composable pieces without business logic
//! - **Components** (`components`): desk chrome bound to `crate::app::Message`
//! - **Pages** (`pages`): one view per desk page
//! - **Effects** (`effects`): full-window overlays

pub mod components;
pub mod effects;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
