//! Domain error types

use thiserror::Error;

/// Error when a word or language cannot form a lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyError {
    #[error("Invalid word: \"{input}\". Expected a non-empty word to look up")]
    EmptyWord { input: String },

    /// `.` and `..` are removed from URL paths, so the search page for them cannot be requested
    #[error("Invalid word: \"{input}\". A word of only '.' or '..' cannot be looked up")]
    DotWord { input: String },

    #[error("Invalid language: \"{input}\". Expected a language code such as 'en'")]
    DotLanguage { input: String },
}

/// Error when configuration is invalid
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Could not determine a cache directory. Pass --cache-dir or set SHELL_FORVO_CACHE_DIR")]
    NoCacheDir,
}
