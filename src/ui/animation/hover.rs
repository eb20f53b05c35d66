//! Hover and fade animations using iced_anim

use std::hash::Hash;
use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Link tile hover duration
const HOVER_DURATION: Duration = Duration::from_millis(200);

/// Dialog fade duration
const FADE_DURATION: Duration = Duration::from_millis(180);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

/// Hover highlight where only one key is hovered at a time
///
/// Tracks the hovered key and the one fading out, nothing else.
#[derive(Debug)]
pub struct HoverAnimations<K: Eq + Hash + Clone> {
    active_key: Option<K>,
    active_anim: Animated<f32>,
    fading_key: Option<K>,
    fading_anim: Animated<f32>,
}

impl<K: Eq + Hash + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> HoverAnimations<K> {
    pub fn new() -> Self {
        Self {
            active_key: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading_key: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Hover `key` (or nothing), fading out whatever was hovered before
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.active_key == key {
            return;
        }

        if let Some(old) = self.active_key.take() {
            let current = *self.active_anim.value();
            self.fading_key = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new_key) = key {
            self.active_key = Some(new_key);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Interpolated highlight for a key (0.0 to 1.0)
    pub fn progress(&self, key: &K) -> f32 {
        if self.active_key.as_ref() == Some(key) {
            *self.active_anim.value()
        } else if self.fading_key.as_ref() == Some(key) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);

        // Forget the faded key once it reached zero
        if self.fading_key.is_some() && !self.fading_anim.is_animating() {
            self.fading_key = None;
        }
    }
}

/// Open/close fade (0.0 hidden, 1.0 shown)
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Fade in
    pub fn show(&mut self) {
        self.animation.update(1.0.into());
    }

    /// Fade out
    pub fn hide(&mut self) {
        self.animation.update(0.0.into());
    }

    /// Jump straight to a value (power saving mode)
    pub fn set_instant(&mut self, visible: bool) {
        let value = if visible { 1.0 } else { 0.0 };
        self.animation = Animated::transition(value, fade_easing());
    }

    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_is_exclusive() {
        let mut anims: HoverAnimations<u8> = HoverAnimations::new();
        assert_eq!(anims.progress(&1), 0.0);

        anims.set_hovered(Some(1));
        assert_eq!(anims.active_key, Some(1));

        anims.set_hovered(Some(2));
        assert_eq!(anims.active_key, Some(2));
        assert_eq!(anims.fading_key, Some(1));

        anims.set_hovered(None);
        assert_eq!(anims.active_key, None);
        assert_eq!(anims.fading_key, Some(2));
    }

    #[test]
    fn test_hover_progress_range() {
        let mut anims: HoverAnimations<u8> = HoverAnimations::new();
        anims.set_hovered(Some(1));
        let progress = anims.progress(&1);
        assert!((0.0..=1.0).contains(&progress));
    }

    #[test]
    fn test_fade_instant() {
        let mut fade = FadeAnimation::new();
        assert_eq!(fade.progress(), 0.0);

        fade.set_instant(true);
        assert_eq!(fade.progress(), 1.0);
        assert!(!fade.is_animating());

        fade.set_instant(false);
        assert_eq!(fade.progress(), 0.0);
    }
}
