// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                // Silence the hum before the output stream goes away
                if let Some(audio) = self.core.audio.as_mut() {
                    audio.stop_spin();
                }
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("Failed to save settings on exit: {}", e);
                }
                tracing::info!("Exiting");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
