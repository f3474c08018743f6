//! Player lookup with automatic detection

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use tracing::debug;

use crate::application::ports::PlaybackError;

use super::external::ExternalPlayer;
use super::tool::{PlayerPreference, PlayerTool};

/// Resolve a player executable.
///
/// `search_path` uses the `PATH` syntax; `None` means the process `PATH`.
pub fn locate_player(tool: PlayerTool, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let found = match search_path {
        Some(paths) => which::which_in(tool.program(), Some(paths), env::current_dir().unwrap_or_default()),
        None => which::which(tool.program()),
    };

    match found {
        Ok(path) => {
            debug!(player = %tool, path = %path.display(), "found player");
            Some(path)
        }
        Err(_) => {
            debug!(player = %tool, "player not found");
            None
        }
    }
}

/// Create a player adapter for the given preference.
///
/// `Auto` falls back through every known player (play → mpg123 → ffplay);
/// an explicit choice must be installed.
pub fn create_player(
    preference: PlayerPreference,
    search_path: Option<&OsStr>,
) -> Result<ExternalPlayer, PlaybackError> {
    preference
        .candidates()
        .into_iter()
        .find_map(|tool| {
            locate_player(tool, search_path).map(|program| ExternalPlayer::new(tool, program))
        })
        .ok_or_else(|| match preference {
            PlayerPreference::Auto => PlaybackError::NoPlayerAvailable {
                packages: PlayerTool::installable(),
            },
            PlayerPreference::Only(tool) => PlaybackError::PlayerNotFound(tool.program().to_string()),
        })
}
