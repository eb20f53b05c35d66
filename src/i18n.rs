//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - ar.rs: Arabic translations (the card's own language)
//! - en.rs: English translations

mod ar;
mod en;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Arabic,
    English,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }

    /// Parse a language code, falling back to Arabic
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .unwrap_or_default()
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Arabic, Language::English]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Player card
    CardMessage,
    AudioUnavailable,

    // Apology dialog
    ApologyTitle,
    ApologyPlea,
    ApologyRefuse,
    ApologyForgive,

    // Social links
    LinksHeading,
    LinkInstagram,
    LinkSnapchat,
    LinkPinterest,
    LinkWhatsApp,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Arabic => ar::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::CardMessage,
        Key::AudioUnavailable,
        Key::ApologyTitle,
        Key::ApologyPlea,
        Key::ApologyRefuse,
        Key::ApologyForgive,
        Key::LinksHeading,
        Key::LinkInstagram,
        Key::LinkSnapchat,
        Key::LinkPinterest,
        Key::LinkWhatsApp,
    ];

    #[test]
    fn test_every_key_translated() {
        for lang in Language::all() {
            for key in ALL_KEYS {
                assert_ne!(t(*lang, *key), "???", "{:?} missing in {:?}", key, lang);
            }
        }
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
        assert_eq!(Language::from_code("zz"), Language::Arabic);
        assert!(Language::Arabic.is_rtl());
        assert!(!Language::English.is_rtl());
    }
}
