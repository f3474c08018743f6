//! Cache layout domain types

mod locator;

pub use locator::{CacheLocator, AUDIO_EXTENSION};
