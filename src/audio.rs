//! Audio cues
//!
//! - `Cue`: the short synthesized effects played on desk events
//! - `SoundBoard`: output device handle that plays cues and the draw hum

mod cues;
mod sfx;

pub use cues::{Cue, Tone};
pub use sfx::SoundBoard;
