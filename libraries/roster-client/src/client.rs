//! Shared HTTP client construction for the consumers.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{ConsumerError, Result};

/// Fixed per-request deadline. There is deliberately no other timeout or
/// retry configuration; failures are the caller's to handle.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Validate and normalize a base URL, and build the HTTP client every
/// consumer shares the shape of.
pub(crate) fn build(base_url: &str) -> Result<(Client, String)> {
    if base_url.is_empty() {
        return Err(ConsumerError::InvalidBaseUrl("URL cannot be empty".into()));
    }

    let trimmed = base_url.trim_end_matches('/');
    let parsed = Url::parse(trimmed)
        .map_err(|e| ConsumerError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConsumerError::InvalidBaseUrl(format!(
                "unsupported scheme '{other}' (must be http or https)"
            )));
        }
    }

    let http = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("roster-client/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok((http, trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(build("https://roster.example.com").is_ok());
        assert!(build("http://localhost:8080").is_ok());
    }

    #[test]
    fn rejects_empty_url() {
        match build("") {
            Err(ConsumerError::InvalidBaseUrl(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected InvalidBaseUrl, got {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(matches!(
            build("roster.example.com"),
            Err(ConsumerError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            build("ftp://roster.example.com"),
            Err(ConsumerError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn trims_trailing_slashes() {
        let (_, base) = build("https://roster.example.com///").unwrap();
        assert_eq!(base, "https://roster.example.com");
    }
}
