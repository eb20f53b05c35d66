//! Giggling avatar in the top-left corner; clicking it opens the apology

use std::path::Path;

use iced::mouse::Interaction;
use iced::widget::{container, image, mouse_area};
use iced::{Element, Radians, Rotation};

use crate::app::Message;

/// Avatar edge length
pub const AVATAR_SIZE: f32 = 120.0;

/// Build the avatar, rotated by `angle` radians
pub fn view(path: &Path, angle: f32) -> Element<'static, Message> {
    let avatar = image(image::Handle::from_path(path))
        .width(AVATAR_SIZE)
        .height(AVATAR_SIZE)
        .content_fit(iced::ContentFit::Contain)
        .rotation(Rotation::Floating(Radians(angle)));

    container(
        mouse_area(avatar)
            .interaction(Interaction::Pointer)
            .on_press(Message::OpenApology),
    )
    .width(AVATAR_SIZE)
    .height(AVATAR_SIZE)
    .into()
}
