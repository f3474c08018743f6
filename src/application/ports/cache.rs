//! Audio cache port interface

use std::path::PathBuf;

use async_trait::async_trait;
use tempfile::TempPath;
use thiserror::Error;

use crate::domain::audio::AudioPayload;
use crate::domain::lookup::LookupKey;

/// Cache errors
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("Failed to create cache directory {path}: {message}")]
    CreateDir { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    Write { path: String, message: String },
}

/// Port for persisting downloaded pronunciations
#[async_trait]
pub trait AudioCache: Send + Sync {
    /// Path where the file for `key` lives (existence not guaranteed)
    fn path(&self, key: &LookupKey) -> PathBuf;

    /// Whether a file for `key` exists; this is the cache-hit predicate
    fn contains(&self, key: &LookupKey) -> bool;

    /// Create the cache directory if missing
    async fn ensure_root(&self) -> Result<(), CacheError>;

    /// Persist `payload` for `key`, returning the cache path
    async fn store(&self, key: &LookupKey, payload: &AudioPayload) -> Result<PathBuf, CacheError>;

    /// Write `payload` to a scratch file that is deleted when the
    /// returned handle is dropped or closed
    async fn store_scratch(&self, payload: &AudioPayload) -> Result<TempPath, CacheError>;
}
