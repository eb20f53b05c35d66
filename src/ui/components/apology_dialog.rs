//! Apology dialog component
//!
//! A small window-like card with a title bar, the apology, an optional plea
//! and the two answers. Clicking the backdrop closes it without an answer.

use iced::alignment::Horizontal;
use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the apology dialog overlay
pub fn view(
    shows_plea: bool,
    animation_progress: f32,
    locale: Locale,
) -> Element<'static, Message> {
    if animation_progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;

    let title_bar = container(
        row![dot(theme::DOT_RED), dot(theme::DOT_YELLOW), dot(theme::DOT_GREEN)].spacing(8),
    )
    .width(Fill)
    .padding([8, 16])
    .style(move |_theme| iced::widget::container::Style {
        background: Some(iced::Background::Color(with_alpha(theme::DIALOG_FRAME, opacity))),
        ..Default::default()
    });

    let title = text(locale.get(Key::ApologyTitle))
        .size(30)
        .font(theme::bold())
        .shaping(text::Shaping::Advanced)
        .color(with_alpha(theme::TEXT_DARK, opacity))
        .align_x(Horizontal::Center)
        .width(Fill);

    let plea: Element<'static, Message> = if shows_plea {
        text(locale.get(Key::ApologyPlea))
            .size(16)
            .shaping(text::Shaping::Advanced)
            .color(with_alpha(theme::TEXT_ALERT, opacity))
            .align_x(Horizontal::Center)
            .width(Fill)
            .into()
    } else {
        Space::new().height(0).into()
    };

    let refuse_btn = button(
        text(locale.get(Key::ApologyRefuse))
            .size(16)
            .font(theme::bold())
            .shaping(text::Shaping::Advanced)
            .align_x(Horizontal::Center)
            .width(Fill),
    )
    .width(Fill)
    .padding([8, 16])
    .style(theme::outline_button)
    .on_press(Message::RefuseApology);

    let forgive_btn = button(
        text(locale.get(Key::ApologyForgive))
            .size(16)
            .font(theme::bold())
            .shaping(text::Shaping::Advanced)
            .align_x(Horizontal::Center)
            .width(Fill),
    )
    .width(Fill)
    .padding([8, 16])
    .style(theme::filled_button)
    .on_press(Message::ForgiveApology);

    let buttons = row![refuse_btn, forgive_btn]
        .spacing(12)
        .align_y(Alignment::Center);

    let body = column![
        Space::new().height(12),
        title,
        Space::new().height(12),
        plea,
        Space::new().height(12),
        buttons,
    ]
    .spacing(4)
    .padding(24);

    let dialog_box = container(column![title_bar, body])
        .max_width(384)
        .width(Fill)
        .clip(true)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(with_alpha(theme::DIALOG_BG, opacity))),
            border: iced::Border {
                radius: 16.0.into(),
                width: 5.0,
                color: with_alpha(theme::DIALOG_FRAME, opacity),
            },
            shadow: iced::Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.35 * opacity),
                offset: iced::Vector::new(0.0, 12.0),
                blur_radius: 32.0,
            },
            ..Default::default()
        });

    // Clicks on the card itself must not reach the backdrop
    let dialog_box = opaque(dialog_box);

    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .padding(24)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.4 * opacity,
            ))),
            ..Default::default()
        });

    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::DismissApology);

    opaque(event_blocker).into()
}

fn dot(color: Color) -> Element<'static, Message> {
    container(Space::new().width(14).height(14))
        .style(theme::dot(color))
        .into()
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}
