//! Primitive UI elements - atomic building blocks
//!
//! Canvas programs that use generic Message types and do not import from
//! `crate::app`.

pub mod progress_ring;

pub use progress_ring::{ProgressRing, view_progress_ring_styled};
