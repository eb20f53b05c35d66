//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Sorry");

    // Player card
    m.insert(
        Key::CardMessage,
        "You became this song to me. I found it because of you and fell for it after you. Sorry I let you go.",
    );
    m.insert(Key::AudioUnavailable, "The song is missing");

    // Apology dialog
    m.insert(Key::ApologyTitle, "Aya, I'm sorry");
    m.insert(Key::ApologyPlea, "That's not an option, you have to forgive me and come back");
    m.insert(Key::ApologyRefuse, "I don't forgive you");
    m.insert(Key::ApologyForgive, "I forgive you");

    // Social links
    m.insert(Key::LinksHeading, "Links you might like (they blocked me) 🙄");
    m.insert(Key::LinkInstagram, "Instagram");
    m.insert(Key::LinkSnapchat, "Snapchat");
    m.insert(Key::LinkPinterest, "Pinterest");
    m.insert(Key::LinkWhatsApp, "WhatsApp");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
