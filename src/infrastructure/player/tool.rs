//! Known player executables and their argument conventions

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

/// Supported command-line players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTool {
    /// `play` from sox
    Sox,
    /// `mpg123`
    Mpg123,
    /// `ffplay` from ffmpeg
    Ffplay,
}

impl PlayerTool {
    /// Probe order used when no player is requested explicitly
    pub const PRIORITY: [PlayerTool; 3] = [PlayerTool::Sox, PlayerTool::Mpg123, PlayerTool::Ffplay];

    /// Executable name looked up on the search path
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Sox => "play",
            Self::Mpg123 => "mpg123",
            Self::Ffplay => "ffplay",
        }
    }

    /// Package that provides the executable
    pub const fn package(&self) -> &'static str {
        match self {
            Self::Sox => "sox",
            Self::Mpg123 => "mpg123",
            Self::Ffplay => "ffmpeg",
        }
    }

    /// Install hint naming the package and its executable, e.g. `'sox (play)'`
    pub fn install_hint(&self) -> String {
        format!("'{} ({})'", self.package(), self.program())
    }

    /// Install hints of every known player, in priority order
    pub fn installable() -> String {
        Self::PRIORITY
            .iter()
            .map(Self::install_hint)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Command-line arguments to play `path`
    pub fn args(&self, path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = match self {
            // sox cannot always sniff mp3 from the extension
            Self::Sox => vec!["-q".into(), "-t".into(), "mp3".into()],
            Self::Mpg123 => vec!["-q".into()],
            Self::Ffplay => vec![
                "-autoexit".into(),
                "-nodisp".into(),
                "-loglevel".into(),
                "quiet".into(),
            ],
        };
        args.push(path.as_os_str().to_os_string());
        args
    }
}

impl fmt::Display for PlayerTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// User preference for player selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPreference {
    /// First available player in priority order
    #[default]
    Auto,
    /// Require a specific player
    Only(PlayerTool),
}

impl PlayerPreference {
    /// Candidates to probe, in order
    pub fn candidates(&self) -> Vec<PlayerTool> {
        match self {
            Self::Auto => PlayerTool::PRIORITY.to_vec(),
            Self::Only(tool) => vec![*tool],
        }
    }
}

impl fmt::Display for PlayerPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Only(tool) => write!(f, "{}", tool),
        }
    }
}
