// src/app/state.rs
//! Application state definitions

use std::time::Instant;

use crate::audio::{AudioPlayer, PlaybackInfo};
use crate::features::{ApologyDialog, GiggleState, Settings, SocialKind};
use crate::i18n::Locale;
use crate::ui::animation::{FadeAnimation, HoverAnimations};
use crate::ui::widgets::ControlSize;

/// Main application state
pub struct App {
    /// Settings, locale and the audio player
    pub core: CoreState,
    /// Transient UI state
    pub ui: UiState,
}

/// Core services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// None when no output device exists or the song failed to load
    pub audio: Option<AudioPlayer>,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings, locale: Locale) -> Self {
        let audio = create_audio_player(&settings);

        Self {
            settings,
            locale,
            audio,
        }
    }

    /// Snapshot of the player, or an empty one without audio
    pub fn playback_info(&self) -> PlaybackInfo {
        self.audio
            .as_ref()
            .map(|player| player.get_info())
            .unwrap_or_default()
    }
}

/// Open the output and load the song paused
fn create_audio_player(settings: &Settings) -> Option<AudioPlayer> {
    let mut player = match AudioPlayer::new() {
        Ok(player) => player,
        Err(e) => {
            tracing::error!("Failed to create audio player: {}", e);
            return None;
        }
    };

    player.set_volume(settings.playback.volume);

    let path = settings.assets.audio_path();
    match player.load(path.clone()) {
        Ok(()) => {
            tracing::info!("Loaded song {:?}", path);
            Some(player)
        }
        Err(e) => {
            tracing::warn!("Song {:?} unavailable: {}", path, e);
            None
        }
    }
}

/// Size the main window opens with
pub const INITIAL_WINDOW_SIZE: iced::Size = iced::Size::new(480.0, 900.0);

/// Below this width the playback controls shrink
const COMPACT_WIDTH: f32 = 400.0;

/// Transient UI state
pub struct UiState {
    /// Last playback snapshot read from the player
    pub playback: PlaybackInfo,
    /// Slider value in percent while dragging
    pub seek_preview: Option<f32>,
    pub giggle: GiggleState,
    pub apology: ApologyDialog,
    pub apology_fade: FadeAnimation,
    pub link_hover: HoverAnimations<SocialKind>,
    /// Current window width, picks the control size
    pub window_width: f32,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            playback: PlaybackInfo::default(),
            seek_preview: None,
            giggle: GiggleState::new(settings.giggle.duration()),
            apology: ApologyDialog::default(),
            apology_fade: FadeAnimation::new(),
            link_hover: HoverAnimations::new(),
            window_width: INITIAL_WINDOW_SIZE.width,
        }
    }

    pub fn control_size(&self) -> ControlSize {
        if self.window_width < COMPACT_WIDTH {
            ControlSize::Compact
        } else {
            ControlSize::Regular
        }
    }

    /// Whether any animation needs frame ticks
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.giggle.is_giggling(now)
            || self.apology_fade.is_animating()
            || self.link_hover.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_ui_has_no_animations() {
        let ui = UiState::new(&Settings::default());
        assert!(!ui.has_active_animations(Instant::now()));
        assert!(ui.seek_preview.is_none());
        assert!(!ui.apology.is_open());
    }

    #[test]
    fn test_control_size_follows_width() {
        let mut ui = UiState::new(&Settings::default());
        assert_eq!(ui.control_size(), ControlSize::Regular);
        ui.window_width = 360.0;
        assert_eq!(ui.control_size(), ControlSize::Compact);
    }

    #[test]
    fn test_giggle_counts_as_animation() {
        let mut ui = UiState::new(&Settings::default());
        let now = Instant::now();
        ui.giggle.start(now);
        assert!(ui.has_active_animations(now));
        assert!(!ui.has_active_animations(now + std::time::Duration::from_secs(2)));
    }
}
