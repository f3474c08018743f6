//! Forvo search page resolver adapter

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::debug;

use crate::application::ports::{AudioResolver, ResolveError};
use crate::domain::lookup::LookupKey;

use super::markup;

/// Error when a configured endpoint cannot be used as a base URL
#[derive(Debug, Clone, Error)]
#[error("Invalid {name} URL \"{url}\": {message}")]
pub struct InvalidEndpointError {
    pub name: &'static str,
    pub url: String,
    pub message: String,
}

/// Resolves audio URLs by scraping forvo.com search pages
pub struct ForvoResolver {
    client: reqwest::Client,
    search_base: Url,
    audio_base: String,
}

impl ForvoResolver {
    /// Create a resolver against the given search site and audio host
    pub fn new(
        client: reqwest::Client,
        search_url: &str,
        audio_url: &str,
    ) -> Result<Self, InvalidEndpointError> {
        Ok(Self {
            client,
            search_base: parse_base("search", search_url)?,
            audio_base: parse_base("audio", audio_url)?
                .as_str()
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Search page URL: `{base}/search/{word}/{language}`
    ///
    /// The language segment is empty for the default language, leaving a
    /// trailing slash.
    pub fn search_url(&self, key: &LookupKey) -> Url {
        let mut url = self.search_base.clone();
        // Checked in `parse_base`: the base always has path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("search")
                .push(key.word())
                .push(key.language().search_segment());
        }
        url
    }

    /// Final audio URL for a decoded audio path
    pub fn audio_url(&self, audio_path: &str) -> String {
        format!("{}/mp3/{}", self.audio_base, audio_path.trim_start_matches('/'))
    }
}

fn parse_base(name: &'static str, url: &str) -> Result<Url, InvalidEndpointError> {
    let invalid = |message: String| InvalidEndpointError {
        name,
        url: url.to_string(),
        message,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if parsed.cannot_be_a_base() {
        return Err(invalid("not a hierarchical URL".to_string()));
    }

    Ok(parsed)
}

#[async_trait]
impl AudioResolver for ForvoResolver {
    async fn resolve_url(&self, key: &LookupKey) -> Result<String, ResolveError> {
        let url = self.search_url(key);
        debug!(%url, "fetching search page");

        let not_found = || ResolveError::NotFound {
            word: key.word().to_string(),
            language: key.language().to_string(),
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        let status = response.status();

        // Unknown words can come back as a 404 page
        if status == StatusCode::NOT_FOUND {
            return Err(not_found());
        }

        if !status.is_success() {
            return Err(ResolveError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        match markup::extract_audio_path(&body) {
            Ok(audio_path) => {
                let audio_url = self.audio_url(&audio_path);
                debug!(%audio_url, "resolved audio url");
                Ok(audio_url)
            }
            Err(e) if e.is_absent() => Err(not_found()),
            Err(e) => Err(ResolveError::MalformedMarkup(e.to_string())),
        }
    }
}
