// src/app/update/apology.rs
//! Apology dialog handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle apology dialog messages
    pub fn handle_apology(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenApology => {
                if !self.ui.apology.is_open() {
                    tracing::debug!(
                        "Opening apology (forgiven: {})",
                        self.ui.apology.is_forgiven()
                    );
                    self.ui.apology.open();
                    self.show_apology_fade(true);
                }
                Some(Task::none())
            }

            Message::RefuseApology => {
                // Stays open so the plea can be read
                self.ui.apology.refuse();
                Some(Task::none())
            }

            Message::ForgiveApology => {
                // A click landing during the fade-out must not reopen the chat
                if !self.ui.apology.is_open() {
                    return Some(Task::none());
                }
                let url = self.ui.apology.forgive();
                self.show_apology_fade(false);
                tracing::info!("Apology accepted");
                Some(Self::open_url_task(url))
            }

            Message::DismissApology => {
                if self.ui.apology.is_open() {
                    self.ui.apology.dismiss();
                    self.show_apology_fade(false);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn show_apology_fade(&mut self, visible: bool) {
        let fade = &mut self.ui.apology_fade;
        if self.core.settings.display.power_saving_mode {
            fade.set_instant(visible);
        } else if visible {
            fade.show();
        } else {
            fade.hide();
        }
    }
}
