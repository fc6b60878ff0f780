// src/app/update/checkin.rs
//! Check-in desk message handlers

use iced::Task;

use super::navigation::notify;
use crate::app::message::Message;
use crate::app::state::App;
use crate::audio::Cue;
use crate::features::{ScanDay, ScanResult};
use crate::ui::pages::checkin::SCAN_INPUT_ID;
use crate::ui::widgets::Toast;

impl App {
    /// Fetch the checked-in count for `day`
    pub(super) fn load_checkin_count(&self, day: ScanDay) -> Task<Message> {
        let Some(client) = self.core.client.clone() else {
            return Task::none();
        };
        Task::perform(
            async move { client.checkin_count(day).await.map_err(|e| e.to_string()) },
            move |result| Message::CheckInCountLoaded(day, result),
        )
    }

    /// Handle check-in related messages
    pub fn handle_checkin(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectScanDay(day) => {
                if self.desk.checkin.select_day(*day) {
                    return Some(self.load_checkin_count(*day));
                }
                Some(Task::none())
            }

            Message::StartScan => match self.desk.checkin.start_scan() {
                Ok(()) => Some(iced::widget::operation::focus(iced::widget::Id::new(
                    SCAN_INPUT_ID,
                ))),
                Err(msg) => Some(notify(Toast::error(msg))),
            },

            Message::StopScan => {
                self.desk.checkin.stop_scan();
                Some(Task::none())
            }

            Message::ScanInputChanged(value) => {
                if self.desk.checkin.is_scanning() {
                    self.desk.checkin.input = value.clone();
                }
                Some(Task::none())
            }

            Message::SubmitScan => {
                let Some(pending) = self.desk.checkin.submit() else {
                    return Some(Task::none());
                };
                let day = pending.day;
                let Some(client) = self.core.client.clone() else {
                    self.desk
                        .checkin
                        .finish(day, ScanResult::error("Backend is not configured"));
                    return Some(Task::none());
                };
                tracing::info!("Checking in {} for {}", pending.reg_num, day);
                Some(Task::perform(
                    async move {
                        match client.check_in(day, &pending.reg_num).await {
                            Ok(check_in) => ScanResult::from(check_in),
                            Err(e) => ScanResult::from(e),
                        }
                    },
                    move |result| Message::CheckInFinished(day, result),
                ))
            }

            Message::CheckInFinished(day, result) => {
                if !self.desk.checkin.finish(*day, result.clone()) {
                    return Some(Task::none());
                }
                let success = result.is_success();
                if success {
                    tracing::info!("Check-in ok: {}", result.message());
                } else {
                    tracing::warn!("Check-in failed: {}", result.message());
                }
                if let Some(audio) = &self.core.audio {
                    audio.play(if success {
                        Cue::CheckInSuccess
                    } else {
                        Cue::CheckInError
                    });
                }
                if success {
                    Some(self.load_checkin_count(*day))
                } else {
                    Some(Task::none())
                }
            }

            Message::CheckInCountLoaded(day, result) => {
                match result {
                    Ok(count) => self.desk.checkin.set_count(*day, *count),
                    Err(e) => tracing::warn!("Failed to load {} count: {}", day, e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
