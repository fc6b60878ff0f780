//! Full-window visual effects

pub mod confetti;

pub use confetti::Confetti;
