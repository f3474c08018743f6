//! HTTP audio downloader adapter

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{AudioDownloader, DownloadError};
use crate::domain::audio::AudioPayload;

/// Downloads audio files with a single GET request
pub struct HttpDownloader {
    client: reqwest::Client,
}

impl HttpDownloader {
    /// Create a downloader sharing an existing client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AudioDownloader for HttpDownloader {
    async fn fetch(&self, url: &str) -> Result<AudioPayload, DownloadError> {
        debug!(url, "downloading audio");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;

        let payload = AudioPayload::from(bytes.to_vec());
        if payload.is_empty() {
            return Err(DownloadError::Empty);
        }

        debug!(url, bytes = payload.size_bytes(), "download complete");
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::build_client;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const UA: &str = "test-agent/1.0";

    fn downloader() -> HttpDownloader {
        HttpDownloader::new(build_client(UA, Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn fetch_returns_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mp3/test/hello.mp3"))
            .and(header("user-agent", UA))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x49, 0x44, 0x33, 0x04]))
            .expect(1)
            .mount(&server)
            .await;

        let payload = downloader()
            .fetch(&format!("{}/mp3/test/hello.mp3", server.uri()))
            .await
            .unwrap();

        assert_eq!(payload.data(), &[0x49, 0x44, 0x33, 0x04]);
    }

    #[tokio::test]
    async fn fetch_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let err = downloader()
            .fetch(&format!("{}/mp3/x.mp3", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::HttpStatus { status: 403, .. }));
    }

    #[tokio::test]
    async fn fetch_rejects_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = downloader()
            .fetch(&format!("{}/mp3/x.mp3", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Empty));
    }

    #[tokio::test]
    async fn fetch_maps_connection_failure() {
        // Nothing listens on a port that was just released
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/mp3/x.mp3", listener.local_addr().unwrap());
        drop(listener);

        let err = downloader().fetch(&url).await.unwrap_err();
        assert!(matches!(err, DownloadError::Network(_)));
    }
}
