// src/app/update/playback.rs
//! Playback message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle playback-related messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::TogglePlayback => {
                if let Some(player) = &mut self.core.audio {
                    match player.toggle() {
                        Ok(true) => tracing::debug!("Playback started"),
                        Ok(false) => tracing::debug!("Playback paused"),
                        Err(e) => tracing::error!("Failed to toggle playback: {}", e),
                    }
                } else {
                    tracing::debug!("Ignoring play/pause: no audio");
                }
                self.refresh_playback();
                Some(Task::none())
            }

            Message::SeekPreview(percent) => {
                // Only the label and thumb follow the drag; audio moves on release
                if self.core.audio.is_some() {
                    self.ui.seek_preview = Some(percent.clamp(0.0, 100.0));
                }
                Some(Task::none())
            }

            Message::SeekRelease => {
                if let Some(percent) = self.ui.seek_preview.take()
                    && let Some(player) = &mut self.core.audio
                    && let Err(e) = player.seek_percent(percent as f64)
                {
                    tracing::error!("Seek to {}% failed: {}", percent, e);
                }
                self.refresh_playback();
                Some(Task::none())
            }

            Message::Skip(delta_secs) => {
                if let Some(player) = &mut self.core.audio
                    && let Err(e) = player.skip(*delta_secs)
                {
                    tracing::error!("Skip by {}s failed: {}", delta_secs, e);
                }
                self.refresh_playback();
                Some(Task::none())
            }

            Message::PlaybackTick => {
                let was_playing = self.ui.playback.is_playing();
                self.refresh_playback();
                if was_playing && !self.ui.playback.is_playing() {
                    tracing::info!("Song finished");
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Re-read the player snapshot the view and subscriptions use
    pub(super) fn refresh_playback(&mut self) {
        self.ui.playback = self.core.playback_info();
    }
}
