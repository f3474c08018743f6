//! HTTP infrastructure module

mod client;
mod downloader;

pub use client::build_client;
pub use downloader::HttpDownloader;
