//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod apology;
mod keyboard;
mod links;
mod playback;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_playback(&message) {
            return task;
        }
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }
        if let Some(task) = self.handle_apology(&message) {
            return task;
        }
        if let Some(task) = self.handle_links(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::keyboard::{Key, Modifiers, key::Named};

    use super::*;
    use crate::app::state::{CoreState, UiState};
    use crate::audio::{PlaybackInfo, PlaybackStatus};
    use crate::features::Settings;
    use crate::i18n::Locale;

    fn app_without_audio(settings: Settings) -> App {
        let ui = UiState::new(&settings);
        App {
            core: CoreState {
                settings,
                locale: Locale::default(),
                audio: None,
            },
            ui,
        }
    }

    #[test]
    fn test_seek_preview_ignored_without_audio() {
        let mut app = app_without_audio(Settings::default());
        let _ = app.update(Message::SeekPreview(40.0));
        assert!(app.ui.seek_preview.is_none());

        let _ = app.update(Message::SeekRelease);
        assert!(app.ui.seek_preview.is_none());
    }

    #[test]
    fn test_playback_controls_are_inert_without_audio() {
        let mut app = app_without_audio(Settings::default());
        let _ = app.update(Message::TogglePlayback);
        let _ = app.update(Message::Skip(5.0));
        assert_eq!(app.ui.playback, PlaybackInfo::default());
        assert_eq!(app.ui.playback.status, PlaybackStatus::Stopped);
    }

    #[test]
    fn test_refuse_then_forgive() {
        let mut app = app_without_audio(Settings::default());
        let _ = app.update(Message::OpenApology);
        let _ = app.update(Message::RefuseApology);
        assert!(app.ui.apology.is_open());
        assert!(app.ui.apology.shows_plea());

        let _ = app.update(Message::ForgiveApology);
        assert!(!app.ui.apology.is_open());
        assert!(!app.ui.apology.is_forgiven());
    }

    #[test]
    fn test_forgive_during_fade_out_is_ignored() {
        let mut app = app_without_audio(Settings::default());
        let _ = app.update(Message::OpenApology);
        let _ = app.update(Message::DismissApology);
        assert!(!app.ui.apology.is_open());

        // The dialog is still drawn while it fades; a late click changes nothing
        let _ = app.update(Message::ForgiveApology);
        assert!(app.ui.apology.is_forgiven());
        assert!(!app.ui.apology.is_open());
    }

    #[test]
    fn test_escape_dismisses_dialog() {
        let mut app = app_without_audio(Settings::default());
        let _ = app.update(Message::OpenApology);
        assert!(app.ui.apology.is_open());

        let _ = app.update(Message::KeyPressed(
            Key::Named(Named::Escape),
            Modifiers::empty(),
        ));
        assert!(!app.ui.apology.is_open());
        assert!(app.ui.apology.is_forgiven());
    }

    #[test]
    fn test_power_saving_fades_instantly() {
        let mut settings = Settings::default();
        settings.display.power_saving_mode = true;
        let mut app = app_without_audio(settings);

        let _ = app.update(Message::OpenApology);
        assert_eq!(app.ui.apology_fade.progress(), 1.0);

        let _ = app.update(Message::DismissApology);
        assert_eq!(app.ui.apology_fade.progress(), 0.0);

        let _ = app.update(Message::GiggleStart);
        assert!(!app.ui.giggle.is_giggling(std::time::Instant::now()));
    }

    #[test]
    fn test_giggle_starts_on_timer() {
        let mut app = app_without_audio(Settings::default());
        let _ = app.update(Message::GiggleStart);
        assert!(app.ui.giggle.is_giggling(std::time::Instant::now()));
        assert!(
            !app.ui
                .giggle
                .is_giggling(std::time::Instant::now() + Duration::from_secs(2))
        );
    }

    #[test]
    fn test_resize_picks_control_size() {
        let mut app = app_without_audio(Settings::default());
        let _ = app.update(Message::WindowResized(iced::Size::new(360.0, 700.0)));
        assert_eq!(app.ui.window_width, 360.0);
        assert_eq!(
            app.ui.control_size(),
            crate::ui::widgets::ControlSize::Compact
        );
    }
}
