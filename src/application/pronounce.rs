//! Pronounce word use case

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::lookup::LookupKey;

use super::ports::{
    AudioCache, AudioDownloader, AudioPlayer, AudioResolver, CacheError, DownloadError,
    PlaybackError, ResolveError,
};

/// Errors from the pronounce use case
#[derive(Debug, Error)]
pub enum PronounceError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),
}

impl PronounceError {
    /// The upstream has no pronunciation for the requested key
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Resolve(ResolveError::NotFound { .. }))
    }

    /// Transport failure talking to the search page or the audio host
    pub fn is_network(&self) -> bool {
        match self {
            Self::Resolve(e) => e.is_network(),
            Self::Download(_) => true,
            _ => false,
        }
    }

    /// No playback backend could be found
    pub fn is_missing_player(&self) -> bool {
        matches!(
            self,
            Self::Playback(
                PlaybackError::NoPlayerAvailable { .. } | PlaybackError::PlayerNotFound(_)
            )
        )
    }
}

/// Input parameters for the pronounce use case
#[derive(Debug, Clone)]
pub struct PronounceInput {
    /// Word and language to play
    pub key: LookupKey,
    /// Play from a scratch file instead of persisting the download
    pub no_cache: bool,
}

/// What the use case ended up playing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PronounceOutcome {
    /// An existing cache file was played; nothing was downloaded
    CacheHit { path: PathBuf },
    /// The download was written to the cache and played from there
    Downloaded { path: PathBuf, size: String },
    /// The download was played from a scratch file that is now gone
    Temporary { size: String },
}

/// Callbacks for progress and status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct PronounceCallbacks {
    /// Called with the cache path when an existing file will be played
    pub on_cache_hit: Option<Box<dyn Fn(&Path) + Send + Sync>>,
    /// Called when the search page lookup starts
    pub on_resolve_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called with the resolved audio URL before downloading
    pub on_download_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called with the human readable size once the download finished
    pub on_download_end: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called with the file path right before playback starts
    pub on_play_start: Option<Box<dyn Fn(&Path) + Send + Sync>>,
}

/// Cache-backed fetch-and-play pipeline
pub struct PronounceUseCase<R, D, C, P>
where
    R: AudioResolver,
    D: AudioDownloader,
    C: AudioCache,
    P: AudioPlayer,
{
    resolver: R,
    downloader: D,
    cache: C,
    player: P,
}

impl<R, D, C, P> PronounceUseCase<R, D, C, P>
where
    R: AudioResolver,
    D: AudioDownloader,
    C: AudioCache,
    P: AudioPlayer,
{
    /// Create a new use case instance
    pub fn new(resolver: R, downloader: D, cache: C, player: P) -> Self {
        Self {
            resolver,
            downloader,
            cache,
            player,
        }
    }

    /// Execute the pronounce workflow
    pub async fn execute(
        &self,
        input: PronounceInput,
        callbacks: PronounceCallbacks,
    ) -> Result<PronounceOutcome, PronounceError> {
        self.cache.ensure_root().await?;

        // Cache hit short-circuits the network entirely, even with --no-cache
        if self.cache.contains(&input.key) {
            let path = self.cache.path(&input.key);
            debug!(key = %input.key, path = %path.display(), "cache hit");

            if let Some(ref cb) = callbacks.on_cache_hit {
                cb(&path);
            }

            self.play(&path, &callbacks).await?;
            return Ok(PronounceOutcome::CacheHit { path });
        }

        debug!(key = %input.key, "cache miss");

        if let Some(ref cb) = callbacks.on_resolve_start {
            cb();
        }

        let url = self.resolver.resolve_url(&input.key).await?;

        if let Some(ref cb) = callbacks.on_download_start {
            cb(&url);
        }

        let payload = self.downloader.fetch(&url).await?;
        let size = payload.human_readable_size();

        if let Some(ref cb) = callbacks.on_download_end {
            cb(&size);
        }

        if input.no_cache {
            let scratch = self.cache.store_scratch(&payload).await?;
            let played = self.play(&scratch, &callbacks).await;

            // Dropping the handle would also delete it; closing surfaces the error
            let scratch_path = scratch.to_path_buf();
            if let Err(e) = scratch.close() {
                warn!(path = %scratch_path.display(), error = %e, "failed to remove scratch file");
            }

            played?;
            return Ok(PronounceOutcome::Temporary { size });
        }

        let path = self.cache.store(&input.key, &payload).await?;
        self.play(&path, &callbacks).await?;

        Ok(PronounceOutcome::Downloaded { path, size })
    }

    async fn play(&self, path: &Path, callbacks: &PronounceCallbacks) -> Result<(), PlaybackError> {
        if let Some(ref cb) = callbacks.on_play_start {
            cb(path);
        }

        self.player.play(path).await
    }
}
