//! Player card component
//!
//! Photo, the message and the pink player panel with the seek slider and
//! the playback buttons.

use std::path::Path;

use iced::alignment::Horizontal;
use iced::widget::{Space, column, container, image, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::{PlaybackProgress, format_time};
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::widgets::{self, ControlSize};

/// Card width, like a phone-sized column
pub const CARD_MAX_WIDTH: f32 = 384.0;

/// Photo edge length
const PHOTO_SIZE: f32 = 240.0;

/// Build the player card
///
/// `seek_preview` is the slider value (percent) while the user drags it.
pub fn view(
    photo: &Path,
    progress: PlaybackProgress,
    seek_preview: Option<f32>,
    is_playing: bool,
    audio_available: bool,
    skip_secs: f64,
    control_size: ControlSize,
    locale: Locale,
) -> Element<'static, Message> {
    let photo = container(
        image(image::Handle::from_path(photo))
            .width(PHOTO_SIZE)
            .height(PHOTO_SIZE)
            .content_fit(iced::ContentFit::Cover)
            .border_radius(12.0),
    )
    .center_x(Fill);

    let message = text(locale.get(Key::CardMessage))
        .size(16)
        .font(theme::bold())
        .shaping(text::Shaping::Advanced)
        .color(theme::TEXT_DARK)
        .align_x(Horizontal::Center)
        .width(Fill);

    let panel = container(player_panel(
        progress,
        seek_preview,
        is_playing,
        audio_available,
        skip_secs,
        control_size,
        locale,
    ))
    .width(Fill)
    .padding(16)
    .style(theme::player_panel);

    container(
        column![
            photo,
            Space::new().height(16),
            message,
            Space::new().height(20),
            panel
        ]
        .align_x(Alignment::Center),
    )
    .max_width(CARD_MAX_WIDTH)
    .width(Fill)
    .padding(20)
    .style(theme::card)
    .into()
}

/// Slider value and elapsed seconds to show
///
/// While dragging, the elapsed label follows the thumb.
pub fn displayed_position(progress: PlaybackProgress, seek_preview: Option<f32>) -> (f32, f64) {
    match seek_preview {
        Some(preview) => (
            preview,
            progress
                .seek_target(preview as f64)
                .unwrap_or(progress.position_secs),
        ),
        None => (progress.percent() as f32, progress.position_secs),
    }
}

/// Time labels around the slider, then the buttons
fn player_panel(
    progress: PlaybackProgress,
    seek_preview: Option<f32>,
    is_playing: bool,
    audio_available: bool,
    skip_secs: f64,
    control_size: ControlSize,
    locale: Locale,
) -> Element<'static, Message> {
    let (percent, elapsed) = displayed_position(progress, seek_preview);

    let times = row![
        text(format_time(elapsed)).size(14),
        container(widgets::progress_slider::view(percent))
            .width(Fill)
            .padding([0, 12]),
        text(format_time(progress.duration_secs)).size(14),
    ]
    .align_y(Alignment::Center);

    let controls = container(widgets::playback_controls::view(
        is_playing,
        audio_available,
        skip_secs,
        control_size,
    ))
    .center_x(Fill);

    let mut panel = column![times, Space::new().height(16), controls];

    if !audio_available {
        panel = panel.push(Space::new().height(8)).push(
            text(locale.get(Key::AudioUnavailable))
                .size(12)
                .shaping(text::Shaping::Advanced)
                .color(theme::PAGE_BG)
                .align_x(Horizontal::Center)
                .width(Fill),
        );
    }

    panel.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_follows_seek_preview() {
        let progress = PlaybackProgress::new(30.0, 200.0);

        let (percent, elapsed) = displayed_position(progress, None);
        assert_eq!(percent, 15.0);
        assert_eq!(format_time(elapsed), "0:30");

        let (percent, elapsed) = displayed_position(progress, Some(50.0));
        assert_eq!(percent, 50.0);
        assert_eq!(format_time(elapsed), "1:40");
    }

    #[test]
    fn test_preview_without_duration_keeps_position() {
        let progress = PlaybackProgress::new(12.0, 0.0);
        let (_, elapsed) = displayed_position(progress, Some(80.0));
        assert_eq!(format_time(elapsed), "0:12");
    }
}
