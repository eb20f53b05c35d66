//! Reusable UI widgets
//!
//! Small building blocks shared by the components: the playback buttons and
//! the seek slider.

pub mod playback_controls;
pub mod progress_slider;

pub use playback_controls::ControlSize;
