//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::SocialKind;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Playback ============
    /// Play or pause the song
    TogglePlayback,
    /// Slider dragged to a value in percent (not applied yet)
    SeekPreview(f32),
    /// Slider released: seek to the previewed value
    SeekRelease,
    /// Skip by seconds, negative skips backwards
    Skip(f64),
    /// Periodic position refresh while playing
    PlaybackTick,

    // ============ Avatar ============
    /// Interval elapsed, start a giggle
    GiggleStart,
    /// Frame tick while something animates
    AnimationTick,

    // ============ Apology dialog ============
    /// Avatar clicked
    OpenApology,
    /// "I don't forgive you"
    RefuseApology,
    /// "I forgive you"
    ForgiveApology,
    /// Closed without an answer (backdrop or Escape)
    DismissApology,

    // ============ Links ============
    /// Social tile clicked
    OpenLink(SocialKind),
    /// Pointer entered or left a social tile
    HoverLink(Option<SocialKind>),
    /// The system URL handler returned
    UrlOpened(Result<(), String>),

    // ============ Window & keyboard ============
    KeyPressed(Key, Modifiers),
    /// Window resized to a new size
    WindowResized(iced::Size),
    /// Main window closed
    WindowClosed,
}
