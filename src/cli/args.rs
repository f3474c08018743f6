//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::domain::lookup::LookupKey;
use crate::infrastructure::player::{PlayerPreference, PlayerTool};

/// shell-forvo - play a word's pronunciation from forvo
#[derive(Parser, Debug)]
#[command(name = "shell-forvo")]
#[command(version)]
#[command(about = "Play a word's pronunciation from forvo")]
#[command(long_about = None)]
pub struct Cli {
    /// Word to pronounce
    pub word: String,

    /// Language code, see https://forvo.com/languages-codes/
    #[arg(short = 'l', long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Disable caching the mp3 file to the cache directory
    #[arg(short = 'c', long)]
    pub no_cache: bool,

    /// Cache directory [default: $XDG_CACHE_HOME/shell-forvo]
    #[arg(long, value_name = "DIR", env = "SHELL_FORVO_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Audio player to use (auto tries play, mpg123, ffplay in order)
    #[arg(short = 'p', long, value_name = "PLAYER", env = "SHELL_FORVO_PLAYER")]
    pub player: Option<PlayerArg>,

    /// Network timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        env = "SHELL_FORVO_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// User agent sent to forvo
    #[arg(long, value_name = "UA", env = "SHELL_FORVO_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Base URL of the search site
    #[arg(long, value_name = "URL", env = "SHELL_FORVO_SEARCH_URL", hide = true)]
    pub search_url: Option<String>,

    /// Base URL of the audio host
    #[arg(long, value_name = "URL", env = "SHELL_FORVO_AUDIO_URL", hide = true)]
    pub audio_url: Option<String>,

    /// Print debug logs to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Player argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    Auto,
    Play,
    Mpg123,
    Ffplay,
}

impl From<PlayerArg> for PlayerPreference {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::Auto => PlayerPreference::Auto,
            PlayerArg::Play => PlayerPreference::Only(PlayerTool::Sox),
            PlayerArg::Mpg123 => PlayerPreference::Only(PlayerTool::Mpg123),
            PlayerArg::Ffplay => PlayerPreference::Only(PlayerTool::Ffplay),
        }
    }
}

/// Parsed pronounce options
#[derive(Debug, Clone)]
pub struct PronounceOptions {
    pub key: LookupKey,
    pub no_cache: bool,
    pub player: PlayerPreference,
}
