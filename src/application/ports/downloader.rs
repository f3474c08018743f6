//! Downloader port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::audio::AudioPayload;

/// Download errors
#[derive(Debug, Clone, Error)]
pub enum DownloadError {
    #[error("Audio request failed: {0}")]
    Network(String),

    #[error("Audio host returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Audio host returned an empty file")]
    Empty,
}

/// Port for fetching audio bytes
#[async_trait]
pub trait AudioDownloader: Send + Sync {
    /// Download the body at `url` verbatim.
    async fn fetch(&self, url: &str) -> Result<AudioPayload, DownloadError>;
}
