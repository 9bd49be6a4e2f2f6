//! List-based fallback: text-pattern mining over every list item.

use super::ExtractStrategy;
use crate::fields;
use crate::parse::Document;
use crate::record::WeatherRecord;

/// The last-resort strategy when no structural selector matched. Every
/// `li` whose flattened text contains a weather keyword is treated as a
/// record candidate, and three independent regex extractions run against
/// that same full text.
///
/// A candidate is kept even when every extraction misses: candidacy is
/// decided by the keyword set, which is wider than what the individual
/// extractors can parse. This deliberately preserves the possibility of
/// partially or fully empty records coming out of this strategy.
pub struct ListBased;

impl ExtractStrategy for ListBased {
    fn name(&self) -> &'static str {
        "list-based"
    }

    fn attempt(&self, doc: &Document) -> Vec<WeatherRecord> {
        let mut records = Vec::new();

        let Ok(items) = doc.select("li") else {
            return records;
        };

        for item in &items {
            let text = item.text();
            if !fields::is_weather_text(&text) {
                continue;
            }

            let date = fields::extract_date(&text);
            // The weekday only moves to its own slot when a month-day
            // token already claimed the date.
            let day_of_week = if date.contains('月') { fields::extract_day_of_week(&text) } else { None };

            records.push(WeatherRecord {
                date,
                day_of_week,
                condition: fields::extract_condition(&text),
                temperature: fields::extract_temperature(&text),
                ..Default::default()
            });
        }

        records
    }
}
