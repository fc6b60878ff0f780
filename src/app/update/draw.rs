// src/app/update/draw.rs
//! Lucky draw message handlers

use iced::Task;
use iced::time::Instant;

use super::navigation::notify;
use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::audio::Cue;
use crate::features::DrawEvent;
use crate::features::admin::{self, check_credentials};
use crate::ui::effects::confetti::{SECOND_WAVE, SECOND_WAVE_DELAY};
use crate::ui::widgets::Toast;

impl App {
    /// Back to the upload screen with audio and confetti stopped
    fn reset_draw(&mut self) {
        self.desk.draw.session.reset();
        self.desk.draw.roster_file = None;
        self.ui.confetti.clear();
        if let Some(audio) = self.core.audio.as_mut() {
            audio.stop_spin();
        }
    }

    fn apply_draw_events(&mut self, events: Vec<DrawEvent>) -> Task<Message> {
        let mut tasks = Vec::new();
        for event in events {
            match event {
                DrawEvent::FinalCountdownStarted => {
                    if let Some(audio) = &self.core.audio {
                        audio.play(Cue::CountdownTick);
                    }
                }
                DrawEvent::Revealed { winner_index } => {
                    tracing::debug!("Revealing participant #{}", winner_index);
                    if let Some(audio) = self.core.audio.as_mut() {
                        audio.stop_spin();
                        audio.play(Cue::Celebration);
                    }
                    self.ui.confetti.burst(&mut rand::rng());
                    tasks.push(Task::perform(helpers::sleep(SECOND_WAVE_DELAY), |_| {
                        Message::SecondWave
                    }));
                }
            }
        }
        Task::batch(tasks)
    }

    /// Handle lucky draw messages
    pub fn handle_draw(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AdminEmailChanged(email) => {
                self.desk.draw.admin.email = email.clone();
                Some(Task::none())
            }

            Message::AdminPinChanged(pin) => {
                self.desk.draw.admin.pin = pin.clone();
                Some(Task::none())
            }

            Message::Login => {
                let login = &mut self.desk.draw.admin;
                if login.checking || login.logged_in {
                    return Some(Task::none());
                }
                login.checking = true;
                Some(Task::perform(helpers::sleep(admin::LOGIN_DELAY), |_| {
                    Message::LoginChecked
                }))
            }

            Message::LoginChecked => {
                let login = &mut self.desk.draw.admin;
                login.checking = false;
                if check_credentials(&self.core.settings.admin, &login.email, &login.pin) {
                    login.logged_in = true;
                    login.pin.clear();
                    tracing::info!("Admin logged in");
                    Some(notify(Toast::success(admin::WELCOME)))
                } else {
                    Some(notify(Toast::error(admin::INVALID_CREDENTIALS)))
                }
            }

            Message::Logout => {
                self.reset_draw();
                self.desk.draw.admin.clear();
                tracing::info!("Admin logged out");
                Some(notify(Toast::success(admin::LOGGED_OUT)))
            }

            Message::PickParticipants => {
                if self.desk.draw.loading_roster {
                    return Some(Task::none());
                }
                self.desk.draw.loading_roster = true;
                Some(Task::perform(
                    helpers::pick_participants(),
                    Message::ParticipantsLoaded,
                ))
            }

            Message::ParticipantsLoaded(result) => {
                self.desk.draw.loading_roster = false;
                match result {
                    None => Some(Task::none()),
                    Some(Ok((file_name, participants))) => {
                        let count = participants.len();
                        self.reset_draw();
                        self.desk.draw.session.load(participants.clone());
                        self.desk.draw.roster_file = Some(file_name.clone());
                        Some(notify(Toast::success(format!(
                            "{} Participants Loaded Successfully!",
                            count
                        ))))
                    }
                    Some(Err(e)) => {
                        tracing::warn!("Participant upload rejected: {}", e);
                        Some(notify(Toast::error(e.clone())))
                    }
                }
            }

            Message::StartDraw => {
                match self
                    .desk
                    .draw
                    .session
                    .start(Instant::now(), &mut rand::rng())
                {
                    Ok(()) => {
                        self.ui.confetti.clear();
                        if let Some(audio) = self.core.audio.as_mut() {
                            audio.start_spin();
                        }
                        Some(Task::none())
                    }
                    Err(e) => Some(notify(Toast::error(e.to_string()))),
                }
            }

            Message::DrawTick(now) => {
                let events = self.desk.draw.session.tick(*now);
                Some(self.apply_draw_events(events))
            }

            Message::CountdownTick => {
                if self.desk.draw.session.countdown_tick() {
                    if let Some(audio) = &self.core.audio {
                        audio.play(Cue::CountdownTick);
                    }
                }
                Some(Task::none())
            }

            Message::ResetDraw => {
                self.reset_draw();
                Some(Task::none())
            }

            Message::ToggleMute => {
                let muted = !self.core.is_muted();
                if let Some(audio) = self.core.audio.as_mut() {
                    audio.set_muted(muted);
                }
                self.core.settings.audio.muted = muted;
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("Failed to save mute setting: {}", e);
                }
                Some(Task::none())
            }

            Message::ConfettiFrame(now) => {
                self.ui.confetti.advance(*now);
                Some(Task::none())
            }

            Message::SecondWave => {
                // Skip if the draw was reset within the delay
                if self.desk.draw.session.revealed_winner().is_some() {
                    self.ui.confetti.fire(&SECOND_WAVE, &mut rand::rng());
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
