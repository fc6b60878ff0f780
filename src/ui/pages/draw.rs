//! Lucky draw page
//!
//! Login gate, roster upload, ready screen, spinning card and winner reveal,
//! each picked from the session phase.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::{AdminLogin, DrawState, Message};
use crate::features::{DrawPhase, DrawSession, Participant};
use crate::ui::primitives::{ProgressRing, view_progress_ring_styled};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};
use crate::ui::widgets::form_field::text_field;

const PANEL_WIDTH: f32 = 440.0;
const SPIN_WIDTH: f32 = 760.0;
const PREVIEW_ROWS: usize = 5;
const RING_SIZE: f32 = 96.0;

/// Which screen the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Upload,
    Ready,
    Spinning,
    Winner,
}

impl Screen {
    pub fn of(state: &DrawState) -> Self {
        if !state.admin.logged_in {
            return Screen::Login;
        }
        match state.session.phase() {
            DrawPhase::Idle if state.session.participants().is_empty() => Screen::Upload,
            DrawPhase::Idle => Screen::Ready,
            DrawPhase::Running => Screen::Spinning,
            DrawPhase::Revealed => Screen::Winner,
        }
    }
}

pub fn view(state: &DrawState, muted: bool, audio_available: bool) -> Element<'_, Message> {
    let screen = Screen::of(state);
    let body = match screen {
        Screen::Login => login(&state.admin),
        Screen::Upload => upload(state.loading_roster),
        Screen::Ready => ready(state),
        Screen::Spinning => spinning(&state.session),
        Screen::Winner => winner(&state.session),
    };

    if screen == Screen::Login {
        return body;
    }

    column![toolbar(muted, audio_available), body]
        .spacing(20)
        .align_x(Alignment::Center)
        .width(Fill)
        .into()
}

fn title<'a>(label: &'a str, size: f32) -> iced::widget::Text<'a> {
    text(label)
        .size(size)
        .font(theme::font(BOLD_WEIGHT))
        .style(|theme| text::Style {
            color: Some(theme::heading(theme)),
        })
}

fn muted_text<'a>(label: impl text::IntoFragment<'a>) -> iced::widget::Text<'a> {
    text(label).size(14).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    })
}

fn wide_button<'a>(label: &'a str, on_press: Option<Message>) -> Element<'a, Message> {
    button(container(text(label).size(15).font(theme::font(MEDIUM_WEIGHT))).center_x(Fill))
        .width(Fill)
        .padding([12, 16])
        .style(theme::primary_button)
        .on_press_maybe(on_press)
        .into()
}

fn toolbar<'a>(muted: bool, audio_available: bool) -> Element<'a, Message> {
    let mut bar = row![Space::new().width(Fill)]
        .spacing(8)
        .align_y(Alignment::Center);
    if audio_available {
        bar = bar.push(
            button(text(if muted { "🔇 Sound off" } else { "🔊 Sound on" }).size(14))
                .padding([6, 12])
                .style(theme::text_button)
                .on_press(Message::ToggleMute),
        );
    }
    bar.push(
        button(text("Logout").size(14))
            .padding([6, 12])
            .style(theme::danger_button)
            .on_press(Message::Logout),
    )
    .width(Fill)
    .into()
}

fn login(admin: &AdminLogin) -> Element<'_, Message> {
    let can_submit = !admin.checking && !admin.email.is_empty() && !admin.pin.is_empty();
    let submit = if can_submit {
        Some(Message::Login)
    } else {
        None
    };

    let email = text_field("Email", &admin.email, false, Message::AdminEmailChanged);
    let mut pin = text_input("PIN", &admin.pin)
        .secure(true)
        .on_input(Message::AdminPinChanged)
        .padding([10, 12])
        .size(15)
        .width(Fill)
        .style(theme::field_input(false));
    if let Some(msg) = submit.clone() {
        pin = pin.on_submit(msg);
    }

    let label = if admin.checking {
        "Verifying..."
    } else {
        "Enter the Lucky Draw System"
    };

    container(
        column![
            column![
                title("Lucky Draw Application", 24.0),
                muted_text("Admin Portal"),
            ]
            .spacing(4)
            .align_x(Alignment::Center)
            .width(Fill),
            email,
            pin,
            wide_button(label, submit),
        ]
        .spacing(16),
    )
    .width(PANEL_WIDTH)
    .padding(28)
    .style(theme::card)
    .into()
}

fn upload<'a>(loading: bool) -> Element<'a, Message> {
    let label = if loading {
        "Loading participants..."
    } else {
        "Upload participants CSV"
    };
    container(
        column![
            title("Ready for the Lucky Draw?", 26.0),
            muted_text("Upload your participants list to begin"),
            Space::new().height(8),
            wide_button(label, (!loading).then_some(Message::PickParticipants)),
            Space::new().height(4),
            muted_text("CSV Format: name, email, mobile"),
            muted_text("Example: Adil, adil@example.com, 1234567890").size(12),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(PANEL_WIDTH)
    .padding(28)
    .style(theme::card)
    .into()
}

fn preview_row(participant: &Participant) -> Element<'_, Message> {
    row![
        text(&participant.name)
            .size(14)
            .font(theme::font(MEDIUM_WEIGHT))
            .width(Fill),
        muted_text(&participant.email).size(13),
    ]
    .spacing(12)
    .into()
}

fn ready(state: &DrawState) -> Element<'_, Message> {
    let participants = state.session.participants();
    let source = state.roster_file.as_deref().unwrap_or("participants");

    let preview = participants
        .iter()
        .take(PREVIEW_ROWS)
        .fold(column![].spacing(8), |list, p| list.push(preview_row(p)));

    container(
        column![
            title("Participants Loaded", 24.0),
            muted_text(format!("{} participants from {}", participants.len(), source)),
            Space::new().height(8),
            text("Preview (First 5):")
                .size(14)
                .font(theme::font(BOLD_WEIGHT))
                .color(theme::GREEN_600),
            container(preview)
                .width(Fill)
                .padding(14)
                .style(theme::badge),
            Space::new().height(8),
            wide_button("Start Lucky Draw", Some(Message::StartDraw)),
            button(container(text("Upload a different file").size(14)).center_x(Fill))
                .width(Fill)
                .padding([8, 16])
                .style(theme::text_button)
                .on_press_maybe((!state.loading_roster).then_some(Message::PickParticipants)),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .width(PANEL_WIDTH)
    .padding(28)
    .style(theme::card)
    .into()
}

fn spinning(session: &DrawSession) -> Element<'_, Message> {
    let name = session.displayed().map(|p| p.name.as_str()).unwrap_or("");
    let total = session.config().total().as_secs_f32().max(f32::EPSILON);
    let fraction = session.remaining().as_secs_f32() / total;

    let ring_color = if session.is_final_countdown() {
        theme::GREEN_400
    } else {
        theme::GREEN_600
    };
    let ring = view_progress_ring_styled(
        ProgressRing::new(fraction)
            .stroke_width(8.0)
            .progress_color(ring_color)
            .label(session.remaining_secs()),
        RING_SIZE,
    );

    let status = if session.is_final_countdown() {
        format!("Final countdown: {}s", session.remaining_secs())
    } else {
        "Drawing a winner...".to_string()
    };

    let card = container(
        column![
            text(name)
                .size(56)
                .font(theme::font(BOLD_WEIGHT))
                .color(theme::GREEN_600)
                .width(Fill)
                .center(),
            muted_text(status),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(SPIN_WIDTH)
    .padding([64, 32])
    .style(theme::spin_card(session.glow()));

    column![ring, card]
        .spacing(28)
        .align_x(Alignment::Center)
        .into()
}

fn detail<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    column![
        muted_text(label).size(12),
        text(value).size(16).font(theme::font(MEDIUM_WEIGHT)),
    ]
    .spacing(2)
    .align_x(Alignment::Center)
    .into()
}

fn winner(session: &DrawSession) -> Element<'_, Message> {
    let Some(winner) = session.revealed_winner() else {
        return Space::new().width(0).height(0).into();
    };

    let card = container(
        column![
            text("🏆 WINNER 🏆")
                .size(18)
                .font(theme::font(BOLD_WEIGHT))
                .color(theme::GREEN_500),
            text(&winner.name)
                .size(56)
                .font(theme::font(BOLD_WEIGHT))
                .style(|theme| text::Style {
                    color: Some(theme::heading(theme)),
                })
                .width(Fill)
                .center(),
            row![
                detail("Contact", &winner.mobile),
                detail("Email", &winner.email)
            ]
            .spacing(48),
        ]
        .spacing(18)
        .align_x(Alignment::Center),
    )
    .width(SPIN_WIDTH)
    .padding([48, 32])
    .style(theme::spin_card(2.0));

    column![
        card,
        container(wide_button("New Draw", Some(Message::ResetDraw))).width(PANEL_WIDTH),
    ]
    .spacing(24)
    .align_x(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::features::DrawConfig;

    fn participant(i: usize) -> Participant {
        Participant {
            id: i.to_string(),
            name: format!("Name {}", i),
            email: format!("n{}@x.in", i),
            mobile: "9000000000".into(),
        }
    }

    #[test]
    fn screens_follow_login_and_phase() {
        let config = DrawConfig::default();
        let mut state = DrawState::new(DrawSession::new(config));
        assert_eq!(Screen::of(&state), Screen::Login);

        state.admin.logged_in = true;
        assert_eq!(Screen::of(&state), Screen::Upload);

        state.session.load((0..3).map(participant).collect());
        assert_eq!(Screen::of(&state), Screen::Ready);

        let t0 = Instant::now();
        state
            .session
            .start(t0, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(Screen::of(&state), Screen::Spinning);

        state.session.tick(t0 + config.total() + Duration::from_millis(5));
        assert_eq!(Screen::of(&state), Screen::Winner);

        state.session.reset();
        assert_eq!(Screen::of(&state), Screen::Upload);
    }

    #[test]
    fn logged_out_always_shows_login() {
        let mut state = DrawState::new(DrawSession::new(DrawConfig::default()));
        state.session.load(vec![participant(0)]);
        assert_eq!(Screen::of(&state), Screen::Login);
    }
}
