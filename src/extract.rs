//! The extraction orchestrator: a priority-ordered strategy cascade.

use serde::Serialize;

use crate::parse::Document;
use crate::probe::{ProbeReport, probe};
use crate::record::WeatherRecord;
use crate::strategies::{ExtractStrategy, default_strategies};

/// The outcome of one extraction pass.
///
/// `report` carries the structure prober's findings and is only populated
/// when the cascade produced no records, as an aid for tuning the
/// selector specs against a new page layout.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Extraction {
    /// Records from the first strategy that produced any, in document order.
    pub records: Vec<WeatherRecord>,
    /// Diagnostic report, present only when `records` is empty.
    pub report: Option<ProbeReport>,
}

/// Runs a strategy cascade over the document.
///
/// Strategies run in slice order and the first non-empty result
/// short-circuits the rest. All strategies coming back empty is an empty
/// vector, never an error; malformed documents simply match nothing.
pub fn run_strategies(doc: &Document, strategies: &[Box<dyn ExtractStrategy + Send + Sync>]) -> Vec<WeatherRecord> {
    for strategy in strategies {
        let records = strategy.attempt(doc);
        if !records.is_empty() {
            return records;
        }
    }

    Vec::new()
}

/// Extracts weather records using the default strategy cascade.
///
/// The cascade order is class-based, then table-based, then the
/// list-based text-mining fallback. Running this twice over the same
/// document yields identical output; no state is kept between calls.
///
/// # Example
///
/// ```rust
/// use skyscrape::{Document, extract};
///
/// let doc = Document::parse("<ul><li>周三 多云 26~31°C</li></ul>");
/// let records = extract(&doc);
/// assert_eq!(records[0].condition, "多云");
/// ```
pub fn extract(doc: &Document) -> Vec<WeatherRecord> {
    run_strategies(doc, &default_strategies())
}

/// Extracts weather records and, when nothing matched, attaches the
/// structure prober's diagnostic report.
pub fn extract_with_report(doc: &Document) -> Extraction {
    let records = extract(doc);
    let report = if records.is_empty() { Some(probe(doc)) } else { None };

    Extraction { records, report }
}
