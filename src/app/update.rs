//! Message update handlers - thin dispatcher delegating to submodules

mod checkin;
mod draw;
mod navigation;
mod registration;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_registration(&message) {
            return task;
        }
        if let Some(task) = self.handle_checkin(&message) {
            return task;
        }
        if let Some(task) = self.handle_draw(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
