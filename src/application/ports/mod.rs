//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod cache;
pub mod downloader;
pub mod player;
pub mod resolver;

// Re-export common types
pub use cache::{AudioCache, CacheError};
pub use downloader::{AudioDownloader, DownloadError};
pub use player::{AudioPlayer, PlaybackError};
pub use resolver::{AudioResolver, ResolveError};
