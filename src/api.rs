//! Registration backend API module
//!
//! JSON client for registration, check-in and check-in counts.

mod client;
pub mod model;

pub use client::EventClient;
pub use model::{ApiError, CheckIn, Registration};
