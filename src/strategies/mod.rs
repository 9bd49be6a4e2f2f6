//! The ordered set of structural extraction strategies.
//!
//! Each strategy is one guess about how a weather page lays out its
//! forecast. Strategies share a single capability, [`ExtractStrategy`],
//! and are run by the orchestrator in fixed priority order with an early
//! exit on the first non-empty result. A strategy never errors; selector
//! failures and absent markup both degrade to an empty result.

mod class_based;
mod list_based;
mod table_based;

pub use class_based::ClassBased;
pub use list_based::ListBased;
pub use table_based::{HEADER_ROWS_SKIPPED, MIN_COLUMNS, TableBased};

use crate::parse::{Document, Element};
use crate::record::WeatherRecord;

/// One structural guess: a container selector plus the sub-selectors
/// resolved inside each matched container.
///
/// The humidity and wind selectors are optional; only some site layouts
/// expose them as dedicated nodes.
#[derive(Debug, Clone, Copy)]
pub struct StrategySpec {
    /// Selector for the per-day container element.
    pub container: &'static str,
    /// Selector for the date node, scoped to the container.
    pub date: &'static str,
    /// Selector for the condition node, scoped to the container.
    pub condition: &'static str,
    /// Selector for the temperature node, scoped to the container.
    pub temperature: &'static str,
    /// Optional selector for a humidity node.
    pub humidity: Option<&'static str>,
    /// Optional selector for a wind node.
    pub wind: Option<&'static str>,
}

/// A single attempt to map a document onto weather records.
pub trait ExtractStrategy {
    /// Short human-readable strategy name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Attempts extraction. An empty vector means "this strategy found
    /// nothing"; it is never an error.
    fn attempt(&self, doc: &Document) -> Vec<WeatherRecord>;
}

/// The default strategy cascade in priority order.
pub fn default_strategies() -> Vec<Box<dyn ExtractStrategy + Send + Sync>> {
    vec![Box::new(ClassBased), Box::new(TableBased), Box::new(ListBased)]
}

/// Joined, normalized text of every element the scoped selector matches.
///
/// Matches nothing, or an invalid selector, both come back as an empty
/// string.
pub(crate) fn scoped_text(container: &Element<'_>, selector: &str) -> String {
    let Ok(matches) = container.select(selector) else {
        return String::new();
    };

    let parts: Vec<String> = matches.iter().map(Element::text).filter(|t| !t.is_empty()).collect();
    parts.join(" ")
}

/// `Some(text)` when non-empty, for the optional record fields.
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
