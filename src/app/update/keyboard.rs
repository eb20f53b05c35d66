// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.execute_action(action));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        let skip = self.core.settings.playback.skip_secs;
        match action {
            Action::PlayPause => self.update(Message::TogglePlayback),
            Action::SkipBackward => self.update(Message::Skip(-skip)),
            Action::SkipForward => self.update(Message::Skip(skip)),
            Action::CloseDialog => self.update(Message::DismissApology),
        }
    }
}
