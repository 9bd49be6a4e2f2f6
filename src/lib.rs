pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod fields;
pub mod parse;
pub mod probe;
pub mod record;
pub mod scrape;
pub mod strategies;

pub use error::{Result, SkyscrapeError};
pub use extract::{Extraction, extract, extract_with_report, run_strategies};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use parse::{Document, Element};
pub use probe::{CANDIDATE_CONTAINERS, ContainerMatch, DivSummary, ProbeReport, probe};
pub use record::WeatherRecord;
#[cfg(feature = "fetch")]
pub use scrape::{ScrapeTask, fetch_and_extract};
pub use scrape::{ScrapeConfig, ScrapeConfigBuilder, WeatherScraper};
pub use strategies::{
    ClassBased, ExtractStrategy, HEADER_ROWS_SKIPPED, ListBased, MIN_COLUMNS, StrategySpec, TableBased,
    default_strategies,
};
