//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup
//! and the main application runner.

pub mod app;
pub mod args;
pub mod logging;
pub mod presenter;

// Re-export commonly used types
pub use app::{
    load_merged_config, run_pronounce, EXIT_ERROR, EXIT_NETWORK_ERROR, EXIT_NO_PLAYER,
    EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::{Cli, PlayerArg, PronounceOptions};
pub use logging::init_logging;
pub use presenter::Presenter;
