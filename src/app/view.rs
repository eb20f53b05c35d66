// src/app/view.rs
//! Application view rendering

use std::time::Instant;

use iced::widget::{Space, column, container, scrollable, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::components::{self, avatar::AVATAR_SIZE};
use crate::ui::theme;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let settings = &self.core.settings;
        let locale = self.core.locale;

        // Card column, scrolled as a whole on short windows
        let player_card = components::player_card::view(
            &settings.assets.photo_path(),
            self.ui.playback.progress(),
            self.ui.seek_preview,
            self.ui.playback.is_playing(),
            self.core.audio.is_some(),
            settings.playback.skip_secs,
            self.ui.control_size(),
            locale,
        );

        let social_grid =
            components::social_grid::view(&settings.assets.dir, &self.ui.link_hover, locale);

        let cards = column![
            // Keeps the avatar from covering the photo
            Space::new().height(AVATAR_SIZE + 16.0),
            player_card,
            Space::new().height(24),
            social_grid,
            Space::new().height(24),
        ]
        .width(Fill)
        .align_x(Alignment::Center)
        .padding([0, 16]);

        let page = container(scrollable(cards).height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::page);

        // Avatar floats in the top-left corner
        let avatar = container(components::avatar::view(
            &settings.assets.avatar_path(),
            self.ui.giggle.angle(Instant::now()),
        ))
        .padding(12)
        .width(Fill)
        .height(Fill)
        .align_left(Fill)
        .align_top(Fill);

        let mut layers = stack![page, avatar].width(Fill).height(Fill);

        let fade = self.ui.apology_fade.progress();
        if self.ui.apology.is_open() || fade > 0.01 {
            layers = layers.push(components::apology_dialog::view(
                self.ui.apology.shows_plea(),
                fade,
                locale,
            ));
        }

        layers.into()
    }
}
