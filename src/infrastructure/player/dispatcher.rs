//! Player dispatcher adapter

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{AudioPlayer, PlaybackError};

use super::factory::create_player;
use super::tool::PlayerPreference;

/// Picks a player when asked to play, then delegates to it.
///
/// Probing happens at play time so a missing player is only reported
/// once there is something to play.
pub struct PlayerDispatcher {
    preference: PlayerPreference,
    search_path: Option<OsString>,
}

impl PlayerDispatcher {
    /// Dispatcher probing the process `PATH`
    pub fn new(preference: PlayerPreference) -> Self {
        Self {
            preference,
            search_path: None,
        }
    }

    /// Probe `search_path` (PATH syntax) instead of the process `PATH`
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }
}

#[async_trait]
impl AudioPlayer for PlayerDispatcher {
    async fn play(&self, path: &Path) -> Result<(), PlaybackError> {
        let player = create_player(self.preference, self.search_path.as_deref())?;
        debug!(player = %player.tool(), preference = %self.preference, "selected player");
        player.play(path).await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::infrastructure::player::PlayerTool;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn install(dir: &TempDir, name: &str) {
        let log = dir.path().join("calls.log");
        let path = dir.path().join(name);
        std::fs::write(
            &path,
            format!("#!/bin/sh\necho \"{} $*\" >> '{}'\n", name, log.display()),
        )
        .unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn calls(dir: &TempDir) -> String {
        std::fs::read_to_string(dir.path().join("calls.log")).unwrap_or_default()
    }

    #[tokio::test]
    async fn falls_back_to_second_player_with_its_own_arguments() {
        let dir = TempDir::new().unwrap();
        install(&dir, "mpg123");
        install(&dir, "ffplay");

        let dispatcher =
            PlayerDispatcher::new(PlayerPreference::Auto).with_search_path(dir.path());
        dispatcher.play(Path::new("/cache/hello-default.mp3")).await.unwrap();

        assert_eq!(calls(&dir).trim(), "mpg123 -q /cache/hello-default.mp3");
    }

    #[tokio::test]
    async fn uses_first_priority_player() {
        let dir = TempDir::new().unwrap();
        install(&dir, "play");
        install(&dir, "mpg123");

        let dispatcher =
            PlayerDispatcher::new(PlayerPreference::Auto).with_search_path(dir.path());
        dispatcher.play(Path::new("/cache/hello-default.mp3")).await.unwrap();

        assert_eq!(calls(&dir).trim(), "play -q -t mp3 /cache/hello-default.mp3");
    }

    #[tokio::test]
    async fn explicit_player() {
        let dir = TempDir::new().unwrap();
        install(&dir, "play");
        install(&dir, "ffplay");

        let dispatcher = PlayerDispatcher::new(PlayerPreference::Only(PlayerTool::Ffplay))
            .with_search_path(dir.path());
        dispatcher.play(Path::new("/cache/a.mp3")).await.unwrap();

        assert_eq!(
            calls(&dir).trim(),
            "ffplay -autoexit -nodisp -loglevel quiet /cache/a.mp3"
        );
    }

    #[tokio::test]
    async fn reports_no_player() {
        let dir = TempDir::new().unwrap();
        let dispatcher =
            PlayerDispatcher::new(PlayerPreference::Auto).with_search_path(dir.path());

        let err = dispatcher.play(Path::new("/cache/a.mp3")).await.unwrap_err();
        assert!(matches!(err, PlaybackError::NoPlayerAvailable { .. }));
        assert!(err.to_string().contains("mpg123"));
    }
}
