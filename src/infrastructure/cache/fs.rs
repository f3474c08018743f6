//! Filesystem audio cache adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::TempPath;
use tokio::fs;
use tracing::debug;

use crate::application::ports::{AudioCache, CacheError};
use crate::domain::audio::AudioPayload;
use crate::domain::cache::{CacheLocator, AUDIO_EXTENSION};
use crate::domain::lookup::LookupKey;

/// Prefix of scratch files written in no-cache mode
const SCRATCH_PREFIX: &str = "shell-forvo-";

/// Prefix of partially written cache entries
const PARTIAL_PREFIX: &str = ".partial-";

/// One file per lookup key below a single cache root
pub struct FsAudioCache {
    locator: CacheLocator,
    scratch_dir: PathBuf,
}

impl FsAudioCache {
    /// Create a cache rooted at `root`, with scratch files in the system temp dir
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            locator: CacheLocator::new(root),
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// Use a custom directory for no-cache scratch files
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    async fn write_new(dir: &Path, prefix: &str, payload: &AudioPayload) -> Result<TempPath, CacheError> {
        let suffix = format!(".{}", AUDIO_EXTENSION);
        let temp = tempfile::Builder::new()
            .prefix(prefix)
            .suffix(&suffix)
            .tempfile_in(dir)
            .map_err(|e| write_error(dir, e))?
            .into_temp_path();

        // On failure `temp` is dropped here, which removes the file
        fs::write(&temp, payload.data())
            .await
            .map_err(|e| write_error(&temp, e))?;

        Ok(temp)
    }
}

fn write_error(path: &Path, e: impl ToString) -> CacheError {
    CacheError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl AudioCache for FsAudioCache {
    fn path(&self, key: &LookupKey) -> PathBuf {
        self.locator.path(key)
    }

    fn contains(&self, key: &LookupKey) -> bool {
        self.locator.path(key).is_file()
    }

    async fn ensure_root(&self) -> Result<(), CacheError> {
        let root = self.locator.root();
        fs::create_dir_all(root)
            .await
            .map_err(|e| CacheError::CreateDir {
                path: root.display().to_string(),
                message: e.to_string(),
            })
    }

    async fn store(&self, key: &LookupKey, payload: &AudioPayload) -> Result<PathBuf, CacheError> {
        let path = self.locator.path(key);

        // Write next to the target and rename so readers never see a partial file
        let temp = Self::write_new(self.locator.root(), PARTIAL_PREFIX, payload).await?;
        temp.persist(&path).map_err(|e| write_error(&path, e.error))?;

        debug!(path = %path.display(), bytes = payload.size_bytes(), "stored in cache");
        Ok(path)
    }

    async fn store_scratch(&self, payload: &AudioPayload) -> Result<TempPath, CacheError> {
        let temp = Self::write_new(&self.scratch_dir, SCRATCH_PREFIX, payload).await?;
        debug!(path = %temp.display(), "wrote scratch file");
        Ok(temp)
    }
}
