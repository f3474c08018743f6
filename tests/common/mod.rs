//! Shared helpers for binary-level tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Search page whose first marker points at `test/hello.mp3`
pub const SEARCH_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <ul class="show-all-pronunciations">
    <li><div class="play" id="play_42" onclick="Play(42,'dGVzdC9oZWxsby5tcDM=','dGVzdC9oZWxsby5vZ2c=',false,'','','h');return false;"></div></li>
  </ul>
</body></html>"#;

/// Search page with no pronunciation on it
pub const EMPTY_SEARCH_PAGE: &str =
    "<!DOCTYPE html><html><body><p>Ooops! No results found.</p></body></html>";

/// The binary with every configuration variable cleared
pub fn shell_forvo() -> Command {
    let mut cmd = Command::cargo_bin("shell-forvo").expect("binary is built");
    for var in [
        "SHELL_FORVO_CACHE_DIR",
        "SHELL_FORVO_PLAYER",
        "SHELL_FORVO_TIMEOUT",
        "SHELL_FORVO_USER_AGENT",
        "SHELL_FORVO_SEARCH_URL",
        "SHELL_FORVO_AUDIO_URL",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Install a fake player named `name` into `dir` that appends
/// `<name> <args>` to `dir/player.log`
#[cfg(unix)]
pub fn install_fake_player(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("player.log");
    let path = dir.join(name);
    std::fs::write(
        &path,
        format!("#!/bin/sh\necho \"{} $*\" >> '{}'\n", name, log.display()),
    )
    .unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Lines written by fake players in `dir`
pub fn player_calls(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("player.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Names of the files in `dir`
pub fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
