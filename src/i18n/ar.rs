//! Arabic translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "آسف");

    // Player card
    m.insert(
        Key::CardMessage,
        "انتي بقيتي الأغنية دي بالنسبالي. عرفتها بسببك وعشقتها من بعدك. آسف إني فرطت فيكي وسيبتك تروحي",
    );
    m.insert(Key::AudioUnavailable, "الأغنية مش موجودة");

    // Apology dialog
    m.insert(Key::ApologyTitle, "آية ، أنا آسف");
    m.insert(Key::ApologyPlea, "مفيش الكلام ده لازم تسامحيني وترجعيلي");
    m.insert(Key::ApologyRefuse, "مسامحتكش");
    m.insert(Key::ApologyForgive, "سامحتك");

    // Social links
    m.insert(Key::LinksHeading, ":🙄 لينكات قد تعجبك ( مبلكاني عليهم )");
    m.insert(Key::LinkInstagram, "انستغرام");
    m.insert(Key::LinkSnapchat, "سناب شات");
    m.insert(Key::LinkPinterest, "بينتريست");
    m.insert(Key::LinkWhatsApp, "واتساب");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
