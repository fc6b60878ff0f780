//! Feature modules - desk logic separated from UI
//!
//! Each feature module contains the core logic for one part of the desk.
//! Features should not depend on UI components directly.

pub mod admin;
pub mod checkin;
pub mod drafts;
pub mod draw;
pub mod participants;
pub mod qr_pass;
pub mod registration;
pub mod settings;
pub mod winner;

pub use checkin::{ScanDay, ScanDesk, ScanResult};
pub use drafts::DraftStore;
pub use draw::{DrawConfig, DrawEvent, DrawPhase, DrawSession, DrawTimer};
pub use participants::Participant;
pub use registration::{Field, FieldErrors, RegistrationForm};
pub use settings::Settings;
