//! The public scraping API.
//!
//! [`WeatherScraper`] ties the pieces together: parse or fetch a page,
//! run the strategy cascade, and hand back records. Two operating modes
//! are supported when the `fetch` feature is enabled: awaiting the
//! pipeline directly ([`WeatherScraper::fetch_and_extract`]) and running
//! it on a background task with a single completion outcome
//! ([`WeatherScraper::spawn_fetch_and_extract`]).
//!
//! # Example
//!
//! ```rust
//! use skyscrape::{Document, WeatherScraper};
//!
//! let scraper = WeatherScraper::new();
//! let doc = Document::parse("<ul><li>周三 多云 26~31°C</li></ul>");
//! let records = scraper.extract(&doc);
//! assert_eq!(records[0].temperature, "26~31°C");
//! ```

use crate::extract::{Extraction, extract};
use crate::parse::Document;
use crate::probe::probe;
use crate::record::WeatherRecord;

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_url};
#[cfg(feature = "fetch")]
use crate::{Result, SkyscrapeError};
#[cfg(feature = "fetch")]
use tokio::sync::oneshot;

/// Configuration for a [`WeatherScraper`].
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Whether an empty extraction attaches a probe report (default: true).
    pub probe_on_empty: bool,

    /// HTTP fetch settings.
    #[cfg(feature = "fetch")]
    pub fetch: FetchConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            probe_on_empty: true,
            #[cfg(feature = "fetch")]
            fetch: FetchConfig::default(),
        }
    }
}

impl ScrapeConfig {
    /// Creates a new builder for ScrapeConfig.
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::new()
    }
}

/// Builder for [`ScrapeConfig`].
///
/// # Example
///
/// ```rust
/// use skyscrape::ScrapeConfig;
///
/// let config = ScrapeConfig::builder()
///     .probe_on_empty(false)
///     .build();
/// ```
pub struct ScrapeConfigBuilder {
    config: ScrapeConfig,
}

impl ScrapeConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ScrapeConfig::default() }
    }

    /// Sets whether an empty extraction attaches a probe report.
    pub fn probe_on_empty(mut self, value: bool) -> Self {
        self.config.probe_on_empty = value;
        self
    }

    /// Sets the fetch timeout in seconds.
    #[cfg(feature = "fetch")]
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent string sent with fetches.
    #[cfg(feature = "fetch")]
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Builds the config.
    pub fn build(self) -> ScrapeConfig {
        self.config
    }
}

impl Default for ScrapeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort weather-forecast extractor.
///
/// Extraction is synchronous, side-effect-free and infallible: whatever
/// the page looks like, the result is a (possibly empty) record sequence.
/// Only fetching can fail.
pub struct WeatherScraper {
    config: ScrapeConfig,
}

impl WeatherScraper {
    /// Creates a scraper with default settings.
    pub fn new() -> Self {
        Self { config: ScrapeConfig::default() }
    }

    /// Creates a scraper with a custom configuration.
    pub fn with_config(config: ScrapeConfig) -> Self {
        Self { config }
    }

    /// Extracts weather records from an already-parsed document.
    pub fn extract(&self, doc: &Document) -> Vec<WeatherRecord> {
        extract(doc)
    }

    /// Extracts weather records, attaching the prober's diagnostic report
    /// when the cascade found nothing (unless `probe_on_empty` is off).
    pub fn extract_with_report(&self, doc: &Document) -> Extraction {
        let records = self.extract(doc);
        let report = if records.is_empty() && self.config.probe_on_empty { Some(probe(doc)) } else { None };

        Extraction { records, report }
    }

    /// Fetches a page and extracts weather records from it.
    ///
    /// This is the synchronous operating mode: the caller awaits the
    /// whole pipeline. The only failure source is the fetch step.
    #[cfg(feature = "fetch")]
    pub async fn fetch_and_extract(&self, url: &str) -> Result<Vec<WeatherRecord>> {
        let doc = fetch_url(url, &self.config.fetch).await?;
        Ok(extract(&doc))
    }

    /// Runs the fetch-and-extract pipeline on a background task.
    ///
    /// The calling context is never blocked; the returned [`ScrapeTask`]
    /// resolves exactly once with either the record sequence or an error.
    /// Must be called from within a tokio runtime.
    #[cfg(feature = "fetch")]
    pub fn spawn_fetch_and_extract(&self, url: &str) -> ScrapeTask {
        let url = url.to_string();
        let fetch_config = self.config.fetch.clone();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let outcome = async {
                let doc = fetch_url(&url, &fetch_config).await?;
                Ok(extract(&doc))
            }
            .await;

            // The receiver may have been dropped; nothing to do then.
            let _ = tx.send(outcome);
        });

        ScrapeTask { rx }
    }
}

impl Default for WeatherScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a background fetch-and-extract pipeline.
///
/// Consuming [`outcome`](ScrapeTask::outcome) is the single completion
/// event: it yields the records on success or one error otherwise, never
/// both and never twice. If the task dies without reporting (a panic in
/// the pipeline), that surfaces as [`SkyscrapeError::TaskFailed`] on the
/// same channel.
#[cfg(feature = "fetch")]
pub struct ScrapeTask {
    rx: oneshot::Receiver<Result<Vec<WeatherRecord>>>,
}

#[cfg(feature = "fetch")]
impl ScrapeTask {
    /// Waits for the background pipeline to finish.
    pub async fn outcome(self) -> Result<Vec<WeatherRecord>> {
        match self.rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(SkyscrapeError::TaskFailed(
                "extraction task terminated before delivering a result".to_string(),
            )),
        }
    }
}

/// Convenience function: fetch a URL and extract records with defaults.
///
/// # Example
///
/// ```no_run
/// use skyscrape::fetch_and_extract;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let records = fetch_and_extract("https://example.com/forecast").await?;
///     for record in &records {
///         println!("{}", record);
///     }
///     Ok(())
/// }
/// ```
#[cfg(feature = "fetch")]
pub async fn fetch_and_extract(url: &str) -> Result<Vec<WeatherRecord>> {
    WeatherScraper::new().fetch_and_extract(url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ScrapeConfig::builder().probe_on_empty(false).build();
        assert!(!config.probe_on_empty);
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_config_builder_fetch_settings() {
        let config = ScrapeConfig::builder().timeout(5).user_agent("test-agent").build();
        assert_eq!(config.fetch.timeout, 5);
        assert_eq!(config.fetch.user_agent, "test-agent");
    }

    #[test]
    fn test_probe_on_empty_toggle() {
        let doc = Document::parse("<p>nothing</p>");

        let scraper = WeatherScraper::new();
        assert!(scraper.extract_with_report(&doc).report.is_some());

        let quiet = WeatherScraper::with_config(ScrapeConfig::builder().probe_on_empty(false).build());
        assert!(quiet.extract_with_report(&doc).report.is_none());
    }

    #[cfg(feature = "fetch")]
    #[tokio::test]
    async fn test_spawn_reports_invalid_url_through_outcome() {
        let scraper = WeatherScraper::new();
        let task = scraper.spawn_fetch_and_extract("definitely not a url");

        let outcome = task.outcome().await;
        assert!(matches!(outcome, Err(SkyscrapeError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[tokio::test]
    async fn test_fetch_and_extract_invalid_url() {
        let result = fetch_and_extract("::::").await;
        assert!(matches!(result, Err(SkyscrapeError::InvalidUrl(_))));
    }
}
