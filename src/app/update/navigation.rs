// src/app/update/navigation.rs
//! Navigation and toast message handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::NavItem;
use crate::ui::widgets::Toast;

/// Task that shows `toast`
pub(super) fn notify(toast: Toast) -> Task<Message> {
    Task::done(Message::ShowToast(toast))
}

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::Navigate(nav) => {
                if self.ui.active_nav == *nav {
                    return Some(Task::none());
                }
                tracing::debug!("Navigate {:?} -> {:?}", self.ui.active_nav, nav);
                self.ui.active_nav = *nav;

                // Refresh the live count when returning to the check-in desk
                match (nav, self.desk.checkin.day()) {
                    (NavItem::CheckIn, Some(day)) => Some(self.load_checkin_count(day)),
                    _ => Some(Task::none()),
                }
            }

            Message::ShowToast(toast) => {
                let id = toast.id;
                let delay = toast.style.auto_hide();
                self.ui.toast = Some(toast.clone());
                Some(Task::perform(helpers::sleep(delay), move |_| {
                    Message::HideToast(id)
                }))
            }

            Message::HideToast(id) => {
                // A newer toast may have replaced the one this hide was scheduled for
                if self.ui.toast.as_ref().is_some_and(|t| t.id == *id) {
                    self.ui.toast = None;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
