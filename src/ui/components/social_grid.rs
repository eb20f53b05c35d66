//! Social links grid component

use std::path::Path;

use iced::alignment::Horizontal;
use iced::widget::{Space, button, column, container, image, mouse_area, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::{SOCIAL_LINKS, SocialKind, SocialLink};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::components::player_card::CARD_MAX_WIDTH;
use crate::ui::theme;

/// Icon edge length inside a tile
const ICON_SIZE: f32 = 40.0;

fn label_key(kind: SocialKind) -> Key {
    match kind {
        SocialKind::Instagram => Key::LinkInstagram,
        SocialKind::Snapchat => Key::LinkSnapchat,
        SocialKind::Pinterest => Key::LinkPinterest,
        SocialKind::WhatsApp => Key::LinkWhatsApp,
    }
}

fn tile(
    link: &SocialLink,
    assets_dir: &Path,
    hover: f32,
    locale: Locale,
) -> Element<'static, Message> {
    let content = row![
        image(image::Handle::from_path(assets_dir.join(link.icon_file)))
            .width(ICON_SIZE)
            .height(ICON_SIZE),
        text(locale.get(label_key(link.kind)))
            .size(20)
            .font(theme::bold())
            .shaping(text::Shaping::Advanced),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let kind = link.kind;
    let btn = button(container(content).center_x(Fill))
        .width(Fill)
        .padding(8)
        .style(theme::link_tile(hover))
        .on_press(Message::OpenLink(kind));

    mouse_area(btn)
        .on_enter(Message::HoverLink(Some(kind)))
        .on_exit(Message::HoverLink(None))
        .into()
}

/// Build the heading and the 2-column grid of links
pub fn view(
    assets_dir: &Path,
    hover: &HoverAnimations<SocialKind>,
    locale: Locale,
) -> Element<'static, Message> {
    let heading = text(locale.get(Key::LinksHeading))
        .size(20)
        .font(theme::bold())
        .shaping(text::Shaping::Advanced)
        .color(theme::TEXT_CREAM)
        .align_x(if locale.language.is_rtl() {
            Horizontal::Right
        } else {
            Horizontal::Left
        })
        .width(Fill);

    let mut grid = column![].spacing(8);
    for pair in SOCIAL_LINKS.chunks(2) {
        let mut line = row![].spacing(8);
        for link in pair {
            line = line.push(tile(link, assets_dir, hover.progress(&link.kind), locale));
        }
        grid = grid.push(line);
    }

    container(column![heading, Space::new().height(4), grid].spacing(8))
        .max_width(CARD_MAX_WIDTH)
        .width(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_link_has_a_label() {
        for link in SOCIAL_LINKS {
            for lang in crate::i18n::Language::all() {
                assert_ne!(crate::i18n::t(*lang, label_key(link.kind)), "???");
            }
        }
    }
}
