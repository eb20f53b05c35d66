//! Audio playback module
//!
//! - `AudioPlayer`: single-track playback over rodio with media-element
//!   semantics (load paused, play, pause, seek, skip)

mod player;

pub use player::{AudioPlayer, PlaybackInfo, PlaybackStatus, PlayerError};
