//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{DraftStore, Settings};
use crate::ui::widgets::Toast;
pub use message::Message;
pub use state::{
    AdminLogin, App, CoreState, DeskState, DrawState, IssuedPass, RegistrationState, UiState,
};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Settings and drafts
        let settings = Settings::load();
        let drafts = DraftStore::open_default();

        // 2. Sub-states
        let mut core = CoreState::new(settings, drafts);
        let desk = DeskState::new(&core.settings, &core.drafts);
        let ui = state::UiState::default();
        let warnings = std::mem::take(&mut core.startup_warnings);

        let app = Self { core, desk, ui };

        // 3. Main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1100.0, 820.0),
            min_size: Some(iced::Size::new(720.0, 600.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "evready-desk".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Startup tasks
        let init_task = Task::batch(
            std::iter::once(open_window.discard()).chain(
                warnings
                    .into_iter()
                    .map(|w| Task::done(Message::ShowToast(Toast::warning(w)))),
            ),
        );

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("EVready 2026 - {}", self.ui.active_nav.title())
    }

    /// Draw timers, confetti frames and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let config = self.desk.draw.session.config();
        let plan = subscription_logic::plan(
            self.desk.draw.session.active_timers(),
            self.ui.confetti.is_active(),
        );

        // 1. Spin ticker
        let spin_sub = if plan.spin {
            iced::time::every(config.tick_interval()).map(Message::DrawTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Final countdown ticker (1s)
        let countdown_sub = if plan.countdown {
            iced::time::every(config.countdown_interval()).map(|_| Message::CountdownTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Confetti animation (vsync rate)
        let confetti_sub = if plan.frames {
            iced::window::frames().map(Message::ConfettiFrame)
        } else {
            iced::Subscription::none()
        };

        // 4. Window close
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([spin_sub, countdown_sub, confetti_sub, close_request_sub])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use crate::features::draw::ActiveTimers;

    /// Periodic sources the app must run right now
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Plan {
        pub spin: bool,
        pub countdown: bool,
        pub frames: bool,
    }

    pub fn plan(timers: ActiveTimers, confetti_active: bool) -> Plan {
        Plan {
            spin: timers.spin,
            countdown: timers.countdown,
            frames: confetti_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::subscription_logic::*;
    use crate::features::draw::ActiveTimers;
    use crate::features::{DrawConfig, DrawSession, Participant};

    fn roster(n: usize) -> Vec<Participant> {
        (0..n)
            .map(|i| Participant {
                id: i.to_string(),
                name: format!("P{}", i),
                email: format!("p{}@x.in", i),
                mobile: "9999999999".into(),
            })
            .collect()
    }

    #[test]
    fn idle_session_runs_nothing() {
        let session = DrawSession::new(DrawConfig::default());
        let p = plan(session.active_timers(), false);
        assert_eq!(
            p,
            Plan {
                spin: false,
                countdown: false,
                frames: false
            }
        );
    }

    #[test]
    fn plan_follows_session_phases() {
        let config = DrawConfig::default();
        let mut session = DrawSession::new(config);
        session.load(roster(4));
        let t0 = Instant::now();
        session.start(t0, &mut StdRng::seed_from_u64(9)).unwrap();

        let running = plan(session.active_timers(), false);
        assert!(running.spin && !running.countdown);

        session.tick(t0 + config.total() - config.countdown_window());
        let countdown = plan(session.active_timers(), false);
        assert!(countdown.spin && countdown.countdown);

        session.tick(t0 + config.total() + Duration::from_millis(1));
        let revealed = plan(session.active_timers(), true);
        assert!(!revealed.spin && !revealed.countdown);
        assert!(revealed.frames);
    }

    #[test]
    fn confetti_frames_independent_of_timers() {
        let timers = ActiveTimers {
            spin: true,
            countdown: false,
        };
        assert!(plan(timers, true).frames);
        assert!(!plan(timers, false).frames);
        assert!(plan(ActiveTimers::NONE, true).frames);
    }
}
