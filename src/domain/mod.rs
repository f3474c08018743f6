//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod audio;
pub mod cache;
pub mod config;
pub mod error;
pub mod lookup;

// Re-export common types
pub use audio::AudioPayload;
pub use cache::CacheLocator;
pub use config::AppConfig;
pub use error::*;
pub use lookup::{Language, LookupKey};
