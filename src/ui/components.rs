//! UI Components - card-specific composite components
//!
//! Components combine widgets with application messages. They are the only
//! layer besides `widgets` that imports from `crate::app`.

pub mod apology_dialog;
pub mod avatar;
pub mod player_card;
pub mod social_grid;
