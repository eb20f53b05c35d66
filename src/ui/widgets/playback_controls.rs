//! Playback control widgets
//!
//! Skip back, play/pause and skip forward, styled as round pink buttons.

use iced::widget::{Space, button, container, row, svg};
use iced::{Alignment, Color, Element, Padding};

use crate::app::Message;
use crate::ui::{icons, theme};

/// Size variant for playback controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlSize {
    /// Player card (64px play button)
    Regular,
    /// Narrow windows
    Compact,
}

impl ControlSize {
    fn play_button_size(&self) -> f32 {
        match self {
            Self::Regular => 64.0,
            Self::Compact => 48.0,
        }
    }

    fn play_icon_size(&self) -> f32 {
        match self {
            Self::Regular => 40.0,
            Self::Compact => 28.0,
        }
    }

    fn skip_icon_size(&self) -> f32 {
        match self {
            Self::Regular => 24.0,
            Self::Compact => 18.0,
        }
    }

    fn spacing(&self) -> f32 {
        match self {
            Self::Regular => 24.0,
            Self::Compact => 16.0,
        }
    }
}

/// Icon for the play button: pause while playing, play otherwise
pub fn play_icon(is_playing: bool) -> &'static str {
    if is_playing {
        icons::PAUSE
    } else {
        icons::PLAY
    }
}

fn icon(source: &'static str, size: f32, color: Color) -> svg::Svg<'static> {
    svg(svg::Handle::from_memory(source.as_bytes()))
        .width(size)
        .height(size)
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}

/// Build the play/pause button
pub fn play_button(is_playing: bool, enabled: bool, size: ControlSize) -> Element<'static, Message> {
    let btn_size = size.play_button_size();
    let icon_size = size.play_icon_size();
    let inner_padding = (btn_size - icon_size) / 2.0;
    // The triangle's visual center sits left of its box
    let offset = if is_playing { 0.0 } else { 2.0 };

    let btn = button(
        container(icon(play_icon(is_playing), icon_size, theme::PINK_500)).padding(Padding {
            top: inner_padding,
            bottom: inner_padding,
            left: inner_padding + offset,
            right: inner_padding - offset,
        }),
    )
    .padding(0)
    .width(btn_size)
    .height(btn_size)
    .style(theme::play_button);

    if enabled {
        btn.on_press(Message::TogglePlayback).into()
    } else {
        btn.into()
    }
}

/// Build a skip button; negative `delta_secs` skips backwards
pub fn skip_button(delta_secs: f64, enabled: bool, size: ControlSize) -> Element<'static, Message> {
    let source = if delta_secs < 0.0 {
        icons::SKIP_BACK
    } else {
        icons::SKIP_FORWARD
    };

    let btn = button(icon(source, size.skip_icon_size(), Color::WHITE))
        .padding(8)
        .style(theme::skip_button);

    if enabled {
        btn.on_press(Message::Skip(delta_secs)).into()
    } else {
        btn.into()
    }
}

/// Build the controls row (back, play/pause, forward)
pub fn view(
    is_playing: bool,
    enabled: bool,
    skip_secs: f64,
    size: ControlSize,
) -> Element<'static, Message> {
    let spacing = size.spacing();

    row![
        skip_button(-skip_secs, enabled, size),
        Space::new().width(spacing),
        play_button(is_playing, enabled, size),
        Space::new().width(spacing),
        skip_button(skip_secs, enabled, size),
    ]
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_icon_follows_state() {
        assert_eq!(play_icon(false), icons::PLAY);
        assert_eq!(play_icon(true), icons::PAUSE);
    }

    #[test]
    fn test_sizes_leave_room_for_icon() {
        for size in [ControlSize::Regular, ControlSize::Compact] {
            assert!(size.play_button_size() > size.play_icon_size());
        }
    }
}
