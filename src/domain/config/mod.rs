//! Configuration domain types

mod app_config;

pub use app_config::{
    AppConfig, APP_DIR_NAME, DEFAULT_AUDIO_URL, DEFAULT_SEARCH_URL, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};
