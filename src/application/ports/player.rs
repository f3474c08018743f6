//! Playback port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    /// `packages` lists what the user can install, e.g. `'sox (play)'`
    #[error("Available audio player not found, install any one of the packages [{packages}] from your package manager")]
    NoPlayerAvailable { packages: String },

    #[error("{0} not found. Please install it or choose another player with --player")]
    PlayerNotFound(String),

    #[error("Failed to launch {player}: {message}")]
    LaunchFailed { player: String, message: String },

    #[error("{player} exited with status: {status}")]
    PlayerFailed { player: String, status: String },
}

/// Port for rendering an audio file
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    /// Play the file at `path`, returning once playback has finished.
    async fn play(&self, path: &Path) -> Result<(), PlaybackError>;
}
