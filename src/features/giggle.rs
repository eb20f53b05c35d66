//! Avatar giggle timing
//!
//! Every interval the avatar wiggles for a short while. The interval itself
//! is driven by an iced subscription; this type only tracks the running
//! wiggle and answers what rotation to draw at a given instant.

use std::time::{Duration, Instant};

/// Rotation keyframes in degrees, evenly spaced over the giggle duration
const KEYFRAMES_DEG: [f32; 6] = [0.0, -6.0, 6.0, -6.0, 6.0, 0.0];

#[derive(Debug, Clone)]
pub struct GiggleState {
    started_at: Option<Instant>,
    duration: Duration,
}

impl GiggleState {
    pub fn new(duration: Duration) -> Self {
        Self {
            started_at: None,
            duration,
        }
    }

    /// Start a giggle (restarts one that is already running)
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Advance the giggle, returning whether it is still running
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.is_giggling(now) {
            true
        } else {
            self.started_at = None;
            false
        }
    }

    pub fn is_giggling(&self, now: Instant) -> bool {
        self.started_at
            .map(|start| now.saturating_duration_since(start) < self.duration)
            .unwrap_or(false)
    }

    /// Rotation to apply to the avatar at `now`, in radians
    pub fn angle(&self, now: Instant) -> f32 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 0.0;
        }

        let t = now.saturating_duration_since(start).as_secs_f32() / self.duration.as_secs_f32();
        if t >= 1.0 {
            return 0.0;
        }

        let segments = (KEYFRAMES_DEG.len() - 1) as f32;
        let scaled = t * segments;
        let idx = scaled.floor() as usize;
        let frac = scaled - idx as f32;
        let from = KEYFRAMES_DEG[idx];
        let to = KEYFRAMES_DEG[idx + 1];

        (from + (to - from) * frac).to_radians()
    }
}
