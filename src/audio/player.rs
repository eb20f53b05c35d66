//! Audio player using rodio
//!
//! Behaves like a page's media element: a track is loaded paused, then
//! played, paused and seeked. Position and duration are read back from the
//! sink on demand; the UI never keeps its own clock.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use crate::features::PlaybackProgress;

/// Playback status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

/// Current playback info
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackInfo {
    pub status: PlaybackStatus,
    pub position: Duration,
    pub duration: Duration,
    pub volume: f32,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume: 1.0,
        }
    }
}

impl PlaybackInfo {
    pub fn progress(&self) -> PlaybackProgress {
        PlaybackProgress::new(self.position.as_secs_f64(), self.duration.as_secs_f64())
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}

/// Errors raised by the audio player
#[derive(Debug, Clone)]
pub enum PlayerError {
    /// No audio output could be opened
    Output(String),
    /// The file could not be opened
    Open(String),
    /// The file is not decodable audio
    Decode(String),
    /// Nothing is loaded
    NoTrack,
    /// Seeking failed even after reloading the track
    Seek(String),
}

impl std::fmt::Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::Output(e) => write!(f, "Failed to create audio output: {}", e),
            PlayerError::Open(e) => write!(f, "Failed to open file: {}", e),
            PlayerError::Decode(e) => write!(f, "Failed to decode audio: {}", e),
            PlayerError::NoTrack => write!(f, "No audio loaded"),
            PlayerError::Seek(e) => write!(f, "Seek failed: {}", e),
        }
    }
}

impl std::error::Error for PlayerError {}

/// Single-track audio player
pub struct AudioPlayer {
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    status: PlaybackStatus,
    duration: Duration,
    volume: f32,
}

impl AudioPlayer {
    /// Create a new audio player on the default output device
    pub fn new() -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::Output(e.to_string()))?;
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            path: None,
            status: PlaybackStatus::Stopped,
            duration: Duration::ZERO,
            volume: 1.0,
        })
    }

    /// Decode a file into a fresh, paused sink
    fn open_sink(&self, path: &Path) -> Result<(Sink, Duration), PlayerError> {
        let file = File::open(path).map_err(|e| PlayerError::Open(e.to_string()))?;
        let reader = BufReader::new(file);
        let source = Decoder::new(reader).map_err(|e| PlayerError::Decode(e.to_string()))?;

        // MP3 decoders usually cannot tell the length up front
        let duration = source
            .total_duration()
            .or_else(|| probe_duration(path))
            .unwrap_or(Duration::ZERO);

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.append(source);
        sink.set_volume(self.volume);

        Ok((sink, duration))
    }

    /// Load a track, ready to play from the start
    pub fn load(&mut self, path: PathBuf) -> Result<(), PlayerError> {
        self.stop();

        let (sink, duration) = self.open_sink(&path)?;
        self.sink = Some(sink);
        self.path = Some(path);
        self.duration = duration;
        self.status = PlaybackStatus::Paused;

        tracing::info!("Loaded audio {:?}, duration: {:?}", self.path, duration);
        Ok(())
    }

    /// Reload the current file into a new paused sink
    fn reload(&mut self) -> Result<(), PlayerError> {
        let path = self.path.clone().ok_or(PlayerError::NoTrack)?;
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        let (sink, duration) = self.open_sink(&path)?;
        self.sink = Some(sink);
        if !duration.is_zero() {
            self.duration = duration;
        }
        Ok(())
    }

    /// Start or resume playback
    ///
    /// A track that already played to its end starts over.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        if self.path.is_none() {
            return Err(PlayerError::NoTrack);
        }

        let ended = self.sink.as_ref().map(|s| s.empty()).unwrap_or(true);
        if ended {
            tracing::debug!("Track ended, restarting from the beginning");
            self.reload()?;
        }

        if let Some(sink) = &self.sink {
            sink.play();
            self.status = PlaybackStatus::Playing;
        }
        Ok(())
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
            self.status = PlaybackStatus::Paused;
        }
    }

    /// Flip between playing and paused, returning whether it now plays
    pub fn toggle(&mut self) -> Result<bool, PlayerError> {
        if self.is_playing() {
            self.pause();
            Ok(false)
        } else {
            self.play()?;
            Ok(true)
        }
    }

    /// Stop playback and drop the sink (the path is kept)
    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.status = PlaybackStatus::Stopped;
    }

    /// Set volume (0.0 to 1.0)
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }

    /// Seek to position, clamped to the track length when it is known
    pub fn seek(&mut self, position: Duration) -> Result<(), PlayerError> {
        let position = if self.duration.is_zero() {
            position
        } else {
            position.min(self.duration)
        };

        let Some(sink) = &self.sink else {
            return Err(PlayerError::NoTrack);
        };

        match seek_loaded(sink, position) {
            Some(Ok(())) => {
                tracing::debug!("Seek to {:?} successful", position);
                return Ok(());
            }
            Some(Err(e)) => {
                tracing::debug!("Direct seek failed: {}, will try reload", e);
            }
            None => {
                tracing::debug!("Track ended, reloading to seek to {:?}", position);
            }
        }

        // A finished sink has no source left to seek in; reload and retry once
        let was_playing = self.is_playing();
        self.reload()?;

        let result = match &self.sink {
            Some(sink) => {
                let result = sink.try_seek(position);
                if was_playing {
                    sink.play();
                }
                result.map_err(|e| PlayerError::Seek(e.to_string()))
            }
            None => Err(PlayerError::NoTrack),
        };

        self.status = if was_playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Paused
        };
        result
    }

    /// Seek to a share of the track given in percent
    pub fn seek_percent(&mut self, percent: f64) -> Result<(), PlayerError> {
        match self.get_info().progress().seek_target(percent) {
            Some(secs) => self.seek(secs_to_duration(secs)?),
            None => {
                tracing::debug!("Ignoring seek to {}%: duration unknown", percent);
                Ok(())
            }
        }
    }

    /// Jump forwards (positive) or backwards (negative) by `delta_secs`
    pub fn skip(&mut self, delta_secs: f64) -> Result<(), PlayerError> {
        let target = self.get_info().progress().skip_target(delta_secs);
        self.seek(secs_to_duration(target)?)
    }

    /// Get current playback info
    pub fn get_info(&self) -> PlaybackInfo {
        let (status, position) = match &self.sink {
            Some(sink) if sink.empty() && self.status == PlaybackStatus::Playing => {
                // Played to the end: report a stopped player parked at the end
                (PlaybackStatus::Stopped, self.duration)
            }
            Some(sink) => (self.status, sink.get_pos()),
            None => (self.status, Duration::ZERO),
        };

        PlaybackInfo {
            status,
            position,
            duration: self.duration,
            volume: self.volume,
        }
    }

    /// Check if currently playing
    pub fn is_playing(&self) -> bool {
        self.get_info().is_playing()
    }
}

/// Seek within a sink that still holds its source
///
/// Returns None once the sink ran dry: rodio then accepts the seek without
/// moving anywhere, so the caller has to reload first.
fn seek_loaded(sink: &Sink, position: Duration) -> Option<Result<(), PlayerError>> {
    if sink.empty() {
        return None;
    }
    Some(
        sink.try_seek(position)
            .map_err(|e| PlayerError::Seek(e.to_string())),
    )
}

fn secs_to_duration(secs: f64) -> Result<Duration, PlayerError> {
    Duration::try_from_secs_f64(secs)
        .map_err(|e| PlayerError::Seek(format!("invalid position {}s: {}", secs, e)))
}

/// Read the track length from the file's metadata
fn probe_duration(path: &Path) -> Option<Duration> {
    use lofty::file::AudioFile;
    use lofty::probe::Probe;

    match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => {
            let duration = tagged.properties().duration();
            (!duration.is_zero()).then_some(duration)
        }
        Err(e) => {
            tracing::warn!("Failed to read duration of {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_progress() {
        let info = PlaybackInfo {
            status: PlaybackStatus::Playing,
            position: Duration::from_secs(45),
            duration: Duration::from_secs(180),
            volume: 1.0,
        };
        assert!(info.is_playing());
        assert!((info.progress().percent() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_info_is_idle() {
        let info = PlaybackInfo::default();
        assert!(!info.is_playing());
        assert_eq!(info.progress().percent(), 0.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PlayerError::NoTrack.to_string(), "No audio loaded");
        assert!(
            PlayerError::Open("missing".into())
                .to_string()
                .contains("missing")
        );
    }

    #[test]
    fn test_ended_sink_asks_for_reload() {
        let (sink, _queue) = Sink::new();
        assert!(sink.empty());
        assert!(seek_loaded(&sink, Duration::from_secs(30)).is_none());
    }

    #[test]
    fn test_positions_out_of_range_are_errors() {
        assert_eq!(secs_to_duration(1.5).unwrap(), Duration::from_millis(1500));
        assert!(matches!(secs_to_duration(1e30), Err(PlayerError::Seek(_))));
        assert!(secs_to_duration(f64::NAN).is_err());
        assert!(secs_to_duration(-1.0).is_err());
    }

    #[test]
    fn test_probe_missing_file() {
        assert_eq!(probe_duration(Path::new("/nonexistent/song.mp3")), None);
    }
}
