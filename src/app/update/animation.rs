// src/app/update/animation.rs
//! Giggle timer and frame tick handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle animation-related messages
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::GiggleStart => {
                if !self.core.settings.display.power_saving_mode {
                    self.ui.giggle.start(Instant::now());
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.giggle.tick(now);
                self.ui.apology_fade.tick(now);
                self.ui.link_hover.tick(now);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
