//! Audio cache infrastructure module

mod fs;

pub use fs::FsAudioCache;
