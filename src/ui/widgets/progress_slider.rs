//! Seek slider
//!
//! Works in percent like a range input: 0 to 100. Dragging only previews
//! the position; the seek happens on release.

use iced::widget::slider;
use iced::{Color, Element, Length};

use crate::app::Message;
use crate::ui::theme;

/// Build the seek slider for a position in percent
pub fn view(percent: f32) -> Element<'static, Message> {
    slider(0.0..=100.0, percent.clamp(0.0, 100.0), Message::SeekPreview)
        .on_release(Message::SeekRelease)
        .width(Length::Fill)
        .height(16)
        .step(0.1)
        .style(|_theme, status| {
            let handle_radius = match status {
                slider::Status::Hovered | slider::Status::Dragged => 7.0,
                _ => 5.0,
            };
            slider::Style {
                rail: slider::Rail {
                    backgrounds: (
                        iced::Background::Color(theme::ACCENT_PINK),
                        iced::Background::Color(theme::lighten(theme::ACCENT_PINK, 0.6)),
                    ),
                    width: 4.0,
                    border: iced::Border {
                        radius: 2.0.into(),
                        width: 0.0,
                        color: Color::TRANSPARENT,
                    },
                },
                handle: slider::Handle {
                    shape: slider::HandleShape::Circle {
                        radius: handle_radius,
                    },
                    background: iced::Background::Color(theme::ACCENT_PINK),
                    border_width: 0.0,
                    border_color: Color::TRANSPARENT,
                },
            }
        })
        .into()
}
