//! Application state definitions

use iced::widget::image;

use crate::api::EventClient;
use crate::audio::SoundBoard;
use crate::features::registration::DRAFT_KEY;
use crate::features::{DraftStore, DrawSession, FieldErrors, RegistrationForm, ScanDesk, Settings};
use crate::ui::components::NavItem;
use crate::ui::effects::Confetti;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Infrastructure (settings, backend client, audio, drafts)
    pub core: CoreState,
    /// Desk data for the three pages
    pub desk: DeskState,
    /// Navigation, toast and overlays
    pub ui: UiState,
}

/// Infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    pub client: Option<EventClient>,
    /// `None` when no output device could be opened
    pub audio: Option<SoundBoard>,
    pub drafts: DraftStore,
    /// Startup problems to surface once as toasts
    pub startup_warnings: Vec<String>,
}

impl CoreState {
    pub fn new(settings: Settings, drafts: DraftStore) -> Self {
        let mut startup_warnings = Vec::new();

        let client = match EventClient::new(&settings.api) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to create HTTP client: {:#}", e);
                startup_warnings.push(format!("Backend unavailable: {}", e));
                None
            }
        };

        let audio = match SoundBoard::new(settings.audio.muted) {
            Ok(board) => Some(board),
            Err(e) => {
                tracing::warn!("{}", e);
                startup_warnings.push("No audio output found, sound is disabled".to_string());
                None
            }
        };

        Self {
            settings,
            client,
            audio,
            drafts,
            startup_warnings,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.audio
            .as_ref()
            .map(SoundBoard::is_muted)
            .unwrap_or(self.settings.audio.muted)
    }
}

/// Page data
pub struct DeskState {
    pub registration: RegistrationState,
    pub checkin: ScanDesk,
    pub draw: DrawState,
}

impl DeskState {
    pub fn new(settings: &Settings, drafts: &DraftStore) -> Self {
        Self {
            registration: RegistrationState::restore(drafts),
            checkin: ScanDesk::default(),
            draw: DrawState::new(DrawSession::new(settings.draw)),
        }
    }
}

/// Registration form plus the pass issued for it
#[derive(Debug, Default)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    pub errors: FieldErrors,
    /// Never stored in the draft
    pub agreed_to_terms: bool,
    pub submitting: bool,
    pub pass: Option<IssuedPass>,
}

impl RegistrationState {
    /// Start from the saved draft, if any
    pub fn restore(drafts: &DraftStore) -> Self {
        let form = drafts
            .get::<RegistrationForm>(DRAFT_KEY)
            .unwrap_or_default();
        if !form.is_blank() {
            tracing::info!("Restored registration draft");
        }
        Self {
            form,
            ..Default::default()
        }
    }

    /// Success screen is showing; edits no longer touch the draft
    pub fn is_complete(&self) -> bool {
        self.pass.is_some()
    }
}

/// Registration number and its rendered pass
#[derive(Debug, Clone)]
pub struct IssuedPass {
    pub reg_num: String,
    /// PNG bytes once rendered
    pub png: Option<Vec<u8>>,
    pub image: Option<image::Handle>,
}

impl IssuedPass {
    pub fn new(reg_num: String) -> Self {
        Self {
            reg_num,
            png: None,
            image: None,
        }
    }

    pub fn set_png(&mut self, png: Vec<u8>) {
        self.image = Some(image::Handle::from_bytes(png.clone()));
        self.png = Some(png);
    }
}

/// Lucky draw page: admin gate and session
#[derive(Debug)]
pub struct DrawState {
    pub session: DrawSession,
    pub admin: AdminLogin,
    /// Name of the uploaded roster file
    pub roster_file: Option<String>,
    pub loading_roster: bool,
}

impl DrawState {
    pub fn new(session: DrawSession) -> Self {
        Self {
            session,
            admin: AdminLogin::default(),
            roster_file: None,
            loading_roster: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminLogin {
    pub email: String,
    pub pin: String,
    pub logged_in: bool,
    /// Credential check in flight
    pub checking: bool,
}

impl AdminLogin {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// UI state
#[derive(Debug, Default)]
pub struct UiState {
    pub active_nav: NavItem,
    pub toast: Option<Toast>,
    pub confetti: Confetti,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> DraftStore {
        let path = std::env::temp_dir().join(format!(
            "evready-state-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        DraftStore::open(path)
    }

    #[test]
    fn registration_restores_draft() {
        let mut drafts = temp_store("restore");
        let form = RegistrationForm {
            name: "Asha".into(),
            mobile: "9876543210".into(),
            ..Default::default()
        };
        drafts.set(DRAFT_KEY, &form).unwrap();

        let state = RegistrationState::restore(&drafts);
        assert_eq!(state.form, form);
        assert!(!state.agreed_to_terms);
        assert!(!state.is_complete());

        if let Some(path) = drafts.path() {
            let _ = std::fs::remove_file(path);
        }
    }

    #[test]
    fn empty_store_gives_blank_form() {
        let drafts = temp_store("blank");
        assert!(RegistrationState::restore(&drafts).form.is_blank());
    }

    #[test]
    fn issued_pass_keeps_png() {
        let mut pass = IssuedPass::new("EV-1".into());
        assert!(pass.image.is_none());
        pass.set_png(vec![1, 2, 3]);
        assert_eq!(pass.png.as_deref(), Some(&[1, 2, 3][..]));
        assert!(pass.image.is_some());
    }

    #[test]
    fn admin_clear_logs_out() {
        let mut admin = AdminLogin {
            email: "a@b.in".into(),
            pin: "1234".into(),
            logged_in: true,
            checking: false,
        };
        admin.clear();
        assert!(!admin.logged_in);
        assert!(admin.email.is_empty() && admin.pin.is_empty());
    }
}
