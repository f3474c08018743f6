//! External command player adapter

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::{AudioPlayer, PlaybackError};

use super::tool::PlayerTool;

/// Plays audio by running a player executable and waiting for it to exit
pub struct ExternalPlayer {
    tool: PlayerTool,
    program: PathBuf,
}

impl ExternalPlayer {
    /// Create a player for `tool`, run from the resolved `program` path
    pub fn new(tool: PlayerTool, program: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            program: program.into(),
        }
    }

    pub fn tool(&self) -> PlayerTool {
        self.tool
    }
}

#[async_trait]
impl AudioPlayer for ExternalPlayer {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let args = self.tool.args(path);
        debug!(program = %self.program.display(), ?args, "spawning player");

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    PlaybackError::PlayerNotFound(self.tool.program().to_string())
                } else {
                    PlaybackError::LaunchFailed {
                        player: self.tool.program().to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        if !status.success() {
            return Err(PlaybackError::PlayerFailed {
                player: self.tool.program().to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
