//! Application messages

use std::path::PathBuf;

use iced::time::Instant;

use crate::api::Registration;
use crate::features::{Field, Participant, ScanDay, ScanResult};
use crate::ui::components::NavItem;
use crate::ui::widgets::Toast;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message
    Noop,

    // ============ Navigation ============
    /// Nav bar item selected
    Navigate(NavItem),

    // ============ Toasts ============
    ShowToast(Toast),
    /// Hide the toast with this id, if it is still showing
    HideToast(u64),

    // ============ Window ============
    RequestClose,

    // ============ Registration ============
    FormChanged(Field, String),
    TermsToggled(bool),
    SubmitRegistration,
    /// Backend answer; error carries the user-facing message
    RegistrationFinished(Result<Registration, String>),
    /// Pass card rendered for the registration number
    QrPassReady(String, Result<Vec<u8>, String>),
    SaveQrPass,
    /// `Ok(None)` when the save dialog was cancelled
    QrPassSaved(Result<Option<PathBuf>, String>),
    NewRegistration,

    // ============ Check-in ============
    SelectScanDay(ScanDay),
    StartScan,
    StopScan,
    ScanInputChanged(String),
    SubmitScan,
    CheckInFinished(ScanDay, ScanResult),
    CheckInCountLoaded(ScanDay, Result<u64, String>),

    // ============ Lucky draw ============
    AdminEmailChanged(String),
    AdminPinChanged(String),
    Login,
    /// Login delay elapsed
    LoginChecked,
    Logout,
    PickParticipants,
    /// Source file name and parsed roster; `None` when the dialog was cancelled
    ParticipantsLoaded(Option<Result<(String, Vec<Participant>), String>>),
    StartDraw,
    DrawTick(Instant),
    CountdownTick,
    ResetDraw,
    ToggleMute,

    // ============ Confetti ============
    ConfettiFrame(Instant),
    SecondWave,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal
            Self::DrawTick(_) => simple!("DrawTick"),
            Self::CountdownTick => simple!("CountdownTick"),
            Self::ConfettiFrame(_) => simple!("ConfettiFrame"),
            Self::Noop => simple!("Noop"),

            Self::Navigate(nav) => simple!("Navigate", "{:?}", nav),
            Self::ShowToast(t) => simple!("ShowToast", "{:?}: {}", t.style, t.message),
            Self::HideToast(id) => simple!("HideToast", "{}", id),
            Self::RequestClose => simple!("RequestClose"),

            // Form values may hold personal data; log the field only
            Self::FormChanged(field, _) => simple!("FormChanged", "{:?}", field),
            Self::TermsToggled(b) => simple!("TermsToggled", "{}", b),
            Self::SubmitRegistration => simple!("SubmitRegistration"),
            Self::RegistrationFinished(Ok(r)) => {
                simple!("RegistrationFinished", "ok, {}", r.reg_num)
            }
            Self::RegistrationFinished(Err(e)) => simple!("RegistrationFinished", "err, {}", e),
            Self::QrPassReady(reg, r) => simple!(
                "QrPassReady",
                "{}, {}",
                reg,
                match r {
                    Ok(png) => format!("{} bytes", png.len()),
                    Err(e) => e.clone(),
                }
            ),
            Self::SaveQrPass => simple!("SaveQrPass"),
            Self::QrPassSaved(r) => simple!("QrPassSaved", "{:?}", r),
            Self::NewRegistration => simple!("NewRegistration"),

            Self::SelectScanDay(day) => simple!("SelectScanDay", "{}", day),
            Self::StartScan => simple!("StartScan"),
            Self::StopScan => simple!("StopScan"),
            Self::ScanInputChanged(s) => simple!("ScanInputChanged", "{} chars", s.len()),
            Self::SubmitScan => simple!("SubmitScan"),
            Self::CheckInFinished(day, r) => {
                simple!("CheckInFinished", "{}, {}", day, r.message())
            }
            Self::CheckInCountLoaded(day, r) => simple!("CheckInCountLoaded", "{}, {:?}", day, r),

            Self::AdminEmailChanged(_) => simple!("AdminEmailChanged"),
            Self::AdminPinChanged(_) => simple!("AdminPinChanged"),
            Self::Login => simple!("Login"),
            Self::LoginChecked => simple!("LoginChecked"),
            Self::Logout => simple!("Logout"),
            Self::PickParticipants => simple!("PickParticipants"),
            Self::ParticipantsLoaded(None) => simple!("ParticipantsLoaded", "cancelled"),
            Self::ParticipantsLoaded(Some(Ok((file, list)))) => {
                simple!("ParticipantsLoaded", "{}, {} participants", file, list.len())
            }
            Self::ParticipantsLoaded(Some(Err(e))) => simple!("ParticipantsLoaded", "err, {}", e),
            Self::StartDraw => simple!("StartDraw"),
            Self::ResetDraw => simple!("ResetDraw"),
            Self::ToggleMute => simple!("ToggleMute"),
            Self::SecondWave => simple!("SecondWave"),
        }
    }
}
