//! Shared HTTP client construction

use std::time::Duration;

/// Build the client used for both the search page and the audio host.
///
/// The upstream rejects requests without a browser-like user agent.
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let client = build_client(
            crate::domain::config::DEFAULT_USER_AGENT,
            Duration::from_secs(15),
        );
        assert!(client.is_ok());
    }

    #[test]
    fn rejects_invalid_user_agent() {
        assert!(build_client("bad\nagent", Duration::from_secs(1)).is_err());
    }
}
