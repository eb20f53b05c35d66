//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::App;
use state::{CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = crate::features::Settings::load();
        let language = Language::from_code(&settings.display.language);
        if language.code() != settings.display.language {
            tracing::warn!(
                "Unknown language {:?}, using {}",
                settings.display.language,
                language.code()
            );
        }
        let locale = Locale::new(language);

        // 2. Initialize sub-states
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings, locale);

        let mut app = Self { core, ui };
        app.ui.playback = app.core.playback_info();

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: state::INITIAL_WINDOW_SIZE,
            min_size: Some(iced::Size::new(360.0, 600.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "apology-card".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        Theme::Light
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        self.core.locale.get(Key::AppName).to_string()
    }

    /// Subscriptions for the giggle timer, animations, playback, keyboard and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::{Duration, Instant};

        let now = Instant::now();
        let power_saving = self.core.settings.display.power_saving_mode;

        let (needs_giggle, needs_animation, needs_playback) =
            subscription_logic::subscription_decisions(
                power_saving,
                self.ui.has_active_animations(now),
                self.ui.playback.is_playing(),
            );

        // 1. Giggle timer
        let giggle_sub = if needs_giggle {
            iced::time::every(self.core.settings.giggle.interval()).map(|_| Message::GiggleStart)
        } else {
            iced::Subscription::none()
        };

        // 2. Animation frames (vsync rate while something moves)
        let animation_sub = if needs_animation {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Playback position refresh
        let playback_sub = if needs_playback {
            let interval = if power_saving { 500 } else { 250 };
            iced::time::every(Duration::from_millis(interval)).map(|_| Message::PlaybackTick)
        } else {
            iced::Subscription::none()
        };

        // 4. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 5. Window events
        let close_event_sub = iced::window::close_events().map(|_id| Message::WindowClosed);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([
            giggle_sub,
            animation_sub,
            playback_sub,
            keyboard_sub,
            close_event_sub,
            resize_sub,
        ])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// The giggle timer is paused in power saving mode
    pub fn needs_giggle_subscription(power_saving: bool) -> bool {
        !power_saving
    }

    pub fn needs_animation_subscription(power_saving: bool, has_animations: bool) -> bool {
        !power_saving && has_animations
    }

    pub fn needs_playback_subscription(is_playing: bool) -> bool {
        is_playing
    }

    /// (giggle, animation, playback)
    pub fn subscription_decisions(
        power_saving: bool,
        has_animations: bool,
        is_playing: bool,
    ) -> (bool, bool, bool) {
        (
            needs_giggle_subscription(power_saving),
            needs_animation_subscription(power_saving, has_animations),
            needs_playback_subscription(is_playing),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_playback_independence {
        use super::*;

        #[test]
        fn playback_active_no_animations() {
            let (_, needs_animation, needs_playback) = subscription_decisions(
                false, // power_saving
                false, // has_animations
                true,  // is_playing
            );
            assert!(!needs_animation, "No frames when nothing animates");
            assert!(needs_playback, "Playback refresh must run while playing");
        }

        #[test]
        fn playback_active_with_animations() {
            let (_, needs_animation, needs_playback) = subscription_decisions(false, true, true);
            assert!(needs_animation && needs_playback);
        }

        #[test]
        fn playback_survives_power_saving() {
            // Power saving slows the refresh, it never stops it
            let (_, needs_animation, needs_playback) = subscription_decisions(true, true, true);
            assert!(!needs_animation);
            assert!(needs_playback);
        }

        #[test]
        fn idle_needs_no_frames() {
            let (needs_giggle, needs_animation, needs_playback) =
                subscription_decisions(false, false, false);
            assert!(needs_giggle, "Giggle timer runs even when idle");
            assert!(!needs_animation);
            assert!(!needs_playback);
        }
    }

    mod property_power_saving {
        use super::*;

        #[test]
        fn power_saving_stops_giggle() {
            let (needs_giggle, _, _) = subscription_decisions(true, false, false);
            assert!(!needs_giggle);
        }

        #[test]
        fn giggle_independent_of_playback() {
            for is_playing in [false, true] {
                let (needs_giggle, _, _) = subscription_decisions(false, false, is_playing);
                assert!(needs_giggle);
            }
        }
    }
}
