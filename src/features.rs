//! Feature modules - behaviour separated from UI
//!
//! Each feature module contains the core logic for one part of the card.
//! Features should not depend on UI components directly.

pub mod apology;
pub mod giggle;
pub mod keybindings;
pub mod links;
pub mod playback;
pub mod settings;

pub use apology::ApologyDialog;
pub use giggle::GiggleState;
pub use keybindings::{Action, KeyBindings};
pub use links::{SOCIAL_LINKS, SocialKind, SocialLink};
pub use playback::{PlaybackProgress, format_time};
pub use settings::Settings;
