//! Class-based extraction against a curated list of known site layouts.

use super::{ExtractStrategy, StrategySpec, non_empty, scoped_text};
use crate::parse::Document;
use crate::record::WeatherRecord;

/// Hand-curated container patterns seen on common weather sites, most
/// likely first. Order encodes priority: the first spec whose container
/// matches anything is used exclusively.
pub(crate) const CLASS_SPECS: &[StrategySpec] = &[
    StrategySpec {
        container: "div.forecast_item",
        date: "div.date",
        condition: "div.weather",
        temperature: "div.temp",
        humidity: Some("div.humidity, span.humidity"),
        wind: Some("div.wind, span.wind"),
    },
    StrategySpec {
        container: "li.weather-item",
        date: "span.date",
        condition: "span.weather",
        temperature: "span.temp",
        humidity: Some("div.humidity, span.humidity"),
        wind: Some("div.wind, span.wind"),
    },
    StrategySpec {
        container: "div.day-item",
        date: "div.day_date",
        condition: "div.wea",
        temperature: "div.tem",
        humidity: None,
        wind: None,
    },
    StrategySpec {
        container: "div.weather-box",
        date: "div.dates",
        condition: "div.condition",
        temperature: "div.temperature",
        humidity: Some("div.humidity, span.humidity"),
        wind: Some("div.wind, span.wind"),
    },
];

/// Tries each [`StrategySpec`] in priority order and maps every matched
/// container to one record, resolving the sub-selectors within that
/// container's subtree only.
pub struct ClassBased;

impl ExtractStrategy for ClassBased {
    fn name(&self) -> &'static str {
        "class-based"
    }

    fn attempt(&self, doc: &Document) -> Vec<WeatherRecord> {
        let mut records = Vec::new();

        for spec in CLASS_SPECS {
            let Ok(containers) = doc.select(spec.container) else {
                continue;
            };
            if containers.is_empty() {
                continue;
            }

            for container in &containers {
                let record = WeatherRecord {
                    date: scoped_text(container, spec.date),
                    condition: scoped_text(container, spec.condition),
                    temperature: scoped_text(container, spec.temperature),
                    humidity: spec.humidity.map(|sel| scoped_text(container, sel)).and_then(non_empty),
                    wind: spec.wind.map(|sel| scoped_text(container, sel)).and_then(non_empty),
                    ..Default::default()
                };

                if record.has_identity() {
                    records.push(record);
                }
            }

            // First matching spec wins; later specs never merge in.
            break;
        }

        records
    }
}
