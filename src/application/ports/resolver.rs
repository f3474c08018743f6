//! Resolver port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::lookup::LookupKey;

/// Resolution errors
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("No pronunciation found for '{word}' in language '{language}'")]
    NotFound { word: String, language: String },

    #[error("Search request failed: {0}")]
    Network(String),

    #[error("Search page returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Unrecognised search page markup: {0}")]
    MalformedMarkup(String),
}

impl ResolveError {
    /// Whether the failure happened on the transport rather than in the page
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}

/// Port for translating a lookup key into a downloadable audio URL
#[async_trait]
pub trait AudioResolver: Send + Sync {
    /// Resolve the audio URL for a word.
    ///
    /// # Arguments
    /// * `key` - The word and language to look up
    ///
    /// # Returns
    /// The absolute URL of the audio file, or `ResolveError::NotFound`
    /// when the upstream has no pronunciation for the key
    async fn resolve_url(&self, key: &LookupKey) -> Result<String, ResolveError>;
}
