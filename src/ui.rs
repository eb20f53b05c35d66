//! UI module: crimson page, white cards, pink accents
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): playback buttons and the seek slider
//! - **Components** (`components`): avatar, apology dialog, player card, links
//! - `animation`, `icons` and `theme` are shared by both

pub mod animation;
pub mod components;
pub mod icons;
pub mod theme;
pub mod widgets;
