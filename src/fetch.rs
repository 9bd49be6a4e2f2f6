//! Fetching and parsing weather pages over HTTP.
//!
//! One GET attempt per call, bounded by a timeout; no retries and no
//! cancellation once a request is in flight.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::parse::Document;
use crate::{Result, SkyscrapeError};

/// HTTP client configuration for fetching weather pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent string sent with the request. Weather portals routinely
    /// serve stripped-down markup to unknown agents, so the default
    /// impersonates a desktop browser.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
        }
    }
}

/// Fetches a URL and parses the response body into a [`Document`].
///
/// Performs a single HTTP GET, following redirects, and never retries.
/// A timeout maps to [`SkyscrapeError::Timeout`]; every other transport
/// failure maps to [`SkyscrapeError::HttpError`].
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<Document> {
    let parsed_url = Url::parse(url).map_err(|e| SkyscrapeError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(SkyscrapeError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http or https",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SkyscrapeError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SkyscrapeError::Timeout { timeout: config.timeout }
            } else {
                SkyscrapeError::HttpError(e)
            }
        })?;

    let body = response.text().await?;

    Ok(Document::parse(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[tokio::test]
    async fn test_fetch_url_rejects_garbage() {
        let result = fetch_url("not-a-url", &FetchConfig::default()).await;
        assert!(matches!(result, Err(SkyscrapeError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_url_rejects_non_http_scheme() {
        let result = fetch_url("ftp://example.com/weather", &FetchConfig::default()).await;
        assert!(matches!(result, Err(SkyscrapeError::InvalidUrl(_))));
    }
}
