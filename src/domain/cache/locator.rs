//! Cache locator: maps a lookup key to its file under the cache root

use std::path::{Path, PathBuf};

use crate::domain::lookup::LookupKey;

/// Extension of every cached pronunciation
pub const AUDIO_EXTENSION: &str = "mp3";

/// Longest file name most filesystems accept (`NAME_MAX`), in bytes
pub const MAX_FILE_NAME_LEN: usize = 255;

/// Separates a shortened stem from its hash; always escaped inside stems
const HASH_SEPARATOR: char = '~';

/// Hex digits of the blake3 hash kept in shortened names
const HASH_LEN: usize = 16;

/// Deterministic mapping from lookup keys to cache file paths.
///
/// File names are `{word}-{language}.mp3`. Characters that are unsafe in a
/// file name (separators, `%`, control and reserved characters, a leading
/// `.`) are percent-encoded; everything else, including non-ASCII text, is
/// kept as written (`hello-default.mp3`, `日本-ja.mp3`). The language
/// component also encodes `-` so that `("a-b", "c")` and `("a", "b-c")` map
/// to different files.
///
/// Names that would exceed [`MAX_FILE_NAME_LEN`] are cut at a character
/// boundary and suffixed with `~{hash}` of the full name.
///
/// Does not touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLocator {
    root: PathBuf,
}

impl CacheLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path where the pronunciation for `key` lives (existence not guaranteed)
    pub fn path(&self, key: &LookupKey) -> PathBuf {
        self.root.join(Self::file_name(key))
    }

    /// File name for `key` inside the cache root
    pub fn file_name(key: &LookupKey) -> String {
        let stem = format!(
            "{}-{}",
            escape(key.word(), false),
            escape(key.language().label(), true)
        );
        let extension = format!(".{}", AUDIO_EXTENSION);

        if stem.len() + extension.len() <= MAX_FILE_NAME_LEN {
            return stem + &extension;
        }

        let hash = blake3::hash(stem.as_bytes()).to_hex();
        let budget = MAX_FILE_NAME_LEN - extension.len() - HASH_SEPARATOR.len_utf8() - HASH_LEN;
        format!(
            "{}{}{}{}",
            truncate_at_char_boundary(&stem, budget),
            HASH_SEPARATOR,
            &hash.as_str()[..HASH_LEN],
            extension
        )
    }
}

fn is_unsafe(c: char, escape_hyphen: bool) -> bool {
    matches!(c, '/' | '\\' | '%' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
        || c == HASH_SEPARATOR
        || c.is_control()
        || (escape_hyphen && c == '-')
}

/// Percent-encode only the characters a file name cannot safely hold
fn escape(component: &str, escape_hyphen: bool) -> String {
    let mut escaped = String::with_capacity(component.len());
    let mut buf = [0u8; 4];

    for (i, c) in component.chars().enumerate() {
        if is_unsafe(c, escape_hyphen) || (i == 0 && c == '.') {
            match c {
                // `urlencoding` leaves these unreserved characters as they are
                '-' | '.' | '~' => escaped.push_str(&format!("%{:02X}", c as u32)),
                _ => escaped.push_str(&urlencoding::encode(c.encode_utf8(&mut buf))),
            }
        } else {
            escaped.push(c);
        }
    }

    escaped
}

fn truncate_at_char_boundary(s: &str, max_len: usize) -> &str {
    let mut end = max_len.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
