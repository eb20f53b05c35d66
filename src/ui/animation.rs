//! Animation helpers built on `iced_anim`
//!
//! - `HoverAnimations`: exclusive hover highlight for the link tiles
//! - `FadeAnimation`: open/close fade for the apology dialog

mod hover;

pub use hover::{FadeAnimation, HoverAnimations};
