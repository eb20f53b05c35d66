//! Keyboard shortcuts
//!
//! A small, configurable map from keys to the card's actions. Defaults:
//! Space/K play-pause, Left/J and Right/L skip, Escape closes the dialog.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    PlayPause,
    SkipBackward,
    SkipForward,
    CloseDialog,
}

/// A key plus the modifiers that must be held
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    #[serde(default)]
    pub modifiers: ModifierSet,
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Keys that can be bound
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    J,
    K,
    L,
    Left,
    Right,
    Space,
    Escape,
    MediaPlayPause,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => {
                let c = c.to_lowercase();
                matches!(
                    (self, c.as_str()),
                    (KeyCode::J, "j") | (KeyCode::K, "k") | (KeyCode::L, "l")
                )
            }
            Key::Named(named) => {
                use iced::keyboard::key::Named;
                matches!(
                    (self, named),
                    (KeyCode::Left, Named::ArrowLeft)
                        | (KeyCode::Right, Named::ArrowRight)
                        | (KeyCode::Space, Named::Space)
                        | (KeyCode::Escape, Named::Escape)
                        | (KeyCode::MediaPlayPause, Named::MediaPlayPause)
                )
            }
            Key::Unidentified => false,
        }
    }
}

/// Action to bindings map
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(
            Action::PlayPause,
            vec![
                KeyBinding::new(KeyCode::Space),
                KeyBinding::new(KeyCode::K),
                KeyBinding::new(KeyCode::MediaPlayPause),
            ],
        );
        bindings.insert(
            Action::SkipBackward,
            vec![KeyBinding::new(KeyCode::Left), KeyBinding::new(KeyCode::J)],
        );
        bindings.insert(
            Action::SkipForward,
            vec![KeyBinding::new(KeyCode::Right), KeyBinding::new(KeyCode::L)],
        );
        bindings.insert(Action::CloseDialog, vec![KeyBinding::new(KeyCode::Escape)]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Find the action bound to a key press
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        for (action, bindings) in &self.bindings {
            for binding in bindings {
                if binding.matches(key, modifiers) {
                    return Some(*action);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[test]
    fn test_default_bindings_cover_all_actions() {
        let bindings = KeyBindings::default();
        for action in [
            Action::PlayPause,
            Action::SkipBackward,
            Action::SkipForward,
            Action::CloseDialog,
        ] {
            assert!(bindings.bindings.contains_key(&action), "{:?}", action);
        }
    }

    #[test]
    fn test_find_action() {
        let bindings = KeyBindings::default();
        let none = Modifiers::empty();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Space), &none),
            Some(Action::PlayPause)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowLeft), &none),
            Some(Action::SkipBackward)
        );
        assert_eq!(
            bindings.find_action(&Key::Character("L".into()), &none),
            Some(Action::SkipForward)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Escape), &none),
            Some(Action::CloseDialog)
        );
        assert_eq!(bindings.find_action(&Key::Named(Named::Enter), &none), None);
    }

    #[test]
    fn test_modifiers_must_match() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Space), &Modifiers::SHIFT),
            None
        );

        let custom: KeyBindings = serde_json::from_str(
            r#"{ "bindings": { "skip_forward": [{ "modifiers": { "ctrl": false, "alt": false, "shift": true }, "key": "right" }] } }"#,
        )
        .unwrap();
        assert_eq!(
            custom.find_action(&Key::Named(Named::ArrowRight), &Modifiers::SHIFT),
            Some(Action::SkipForward)
        );
        assert_eq!(
            custom.find_action(&Key::Named(Named::ArrowRight), &Modifiers::empty()),
            None
        );
    }
}
