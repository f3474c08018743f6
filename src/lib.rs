//! shell-forvo - play a word's pronunciation from forvo.com
//!
//! This crate resolves a word (plus optional language code) to a
//! pronunciation clip on forvo.com, downloads it, caches it on disk and
//! plays it through a locally installed command-line audio player.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Lookup keys, the cache path convention, audio payloads, configuration
//! - **Application**: The fetch-and-play use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (search page scraping, HTTP, filesystem, players)
//! - **CLI**: Command-line interface, argument parsing, output and logging

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
