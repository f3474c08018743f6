//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the forvo.com site,
//! the filesystem and command-line audio players.

pub mod cache;
pub mod forvo;
pub mod http;
pub mod player;

// Re-export adapters
pub use cache::FsAudioCache;
pub use forvo::ForvoResolver;
pub use http::{build_client, HttpDownloader};
pub use player::{create_player, ExternalPlayer, PlayerDispatcher, PlayerPreference, PlayerTool};
