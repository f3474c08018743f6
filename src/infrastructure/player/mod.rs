//! Playback infrastructure module
//!
//! Plays files through one of several command-line audio players,
//! picked by availability in priority order.

mod dispatcher;
mod external;
mod factory;
mod tool;

pub use dispatcher::PlayerDispatcher;
pub use external::ExternalPlayer;
pub use factory::{create_player, locate_player};
pub use tool::{PlayerPreference, PlayerTool};
