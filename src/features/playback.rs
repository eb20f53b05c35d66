//! Playback maths shared by the player and the player card
//!
//! Everything here is derived from two numbers the audio player reports:
//! the current position and the total duration, both in seconds.

/// Snapshot of the player's position and duration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackProgress {
    pub position_secs: f64,
    pub duration_secs: f64,
}

impl PlaybackProgress {
    pub fn new(position_secs: f64, duration_secs: f64) -> Self {
        Self {
            position_secs,
            duration_secs,
        }
    }

    /// Whether the duration is known (positive and finite)
    pub fn has_duration(&self) -> bool {
        self.duration_secs.is_finite() && self.duration_secs > 0.0
    }

    /// Played share of the track in percent (0.0 to 100.0)
    ///
    /// Returns 0.0 while the duration is unknown.
    pub fn percent(&self) -> f64 {
        if !self.has_duration() || !self.position_secs.is_finite() {
            return 0.0;
        }
        (self.position_secs / self.duration_secs * 100.0).clamp(0.0, 100.0)
    }

    /// Position in seconds that corresponds to a slider value in percent
    pub fn seek_target(&self, percent: f64) -> Option<f64> {
        if !self.has_duration() || !percent.is_finite() {
            return None;
        }
        Some(percent.clamp(0.0, 100.0) / 100.0 * self.duration_secs)
    }

    /// Position after skipping by `delta_secs`, kept inside the track
    pub fn skip_target(&self, delta_secs: f64) -> f64 {
        let current = if self.position_secs.is_finite() {
            self.position_secs
        } else {
            0.0
        };
        let target = (current + delta_secs).max(0.0);
        if self.has_duration() {
            target.min(self.duration_secs)
        } else {
            target
        }
    }
}

/// Format seconds as `m:ss`
///
/// Zero, negative and non-finite values render as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "0:00".to_string();
    }
    let minutes = (secs / 60.0).floor() as u64;
    let seconds = (secs % 60.0).floor() as u64;
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
        assert_eq!(format_time(4.99), "0:04");
        assert_eq!(format_time(75.9), "1:15");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn test_percent_unknown_duration() {
        assert_eq!(PlaybackProgress::new(12.0, 0.0).percent(), 0.0);
        assert_eq!(PlaybackProgress::new(12.0, f64::NAN).percent(), 0.0);
    }

    #[test]
    fn test_percent() {
        let progress = PlaybackProgress::new(30.0, 120.0);
        assert!((progress.percent() - 25.0).abs() < 1e-9);
        // Position reported slightly past the end stays at 100
        assert_eq!(PlaybackProgress::new(121.0, 120.0).percent(), 100.0);
    }

    #[test]
    fn test_seek_target() {
        let progress = PlaybackProgress::new(0.0, 200.0);
        assert_eq!(progress.seek_target(50.0), Some(100.0));
        assert_eq!(progress.seek_target(150.0), Some(200.0));
        assert_eq!(progress.seek_target(-1.0), Some(0.0));
        assert_eq!(PlaybackProgress::default().seek_target(50.0), None);
    }

    #[test]
    fn test_skip_clamps_to_track() {
        let progress = PlaybackProgress::new(3.0, 100.0);
        assert_eq!(progress.skip_target(-5.0), 0.0);
        assert_eq!(progress.skip_target(5.0), 8.0);

        let near_end = PlaybackProgress::new(97.0, 100.0);
        assert_eq!(near_end.skip_target(5.0), 100.0);
    }

    #[test]
    fn test_skip_without_duration() {
        let progress = PlaybackProgress::new(10.0, 0.0);
        assert_eq!(progress.skip_target(5.0), 15.0);
        assert_eq!(progress.skip_target(-20.0), 0.0);
    }
}
