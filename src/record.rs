//! The weather-record output type.

use serde::Serialize;
use std::fmt;

/// One extracted forecast entry.
///
/// Every field is free text taken from the page; no normalization beyond
/// whitespace collapsing is applied, and `temperature` may hold either a
/// single reading or a high/low range exactly as the page printed it.
/// Records are not deduplicated across a result sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeatherRecord {
    /// Date text (e.g. `3月5日` or `周三`). May be empty.
    pub date: String,

    /// Weekday, when the page carries it separately from the date.
    pub day_of_week: Option<String>,

    /// Weather condition text (e.g. `多云`). May be empty.
    pub condition: String,

    /// Temperature text, single value or range (e.g. `26~31°C`). May be empty.
    pub temperature: String,

    /// Relative humidity text.
    pub humidity: Option<String>,

    /// Wind direction/strength text.
    pub wind: Option<String>,

    /// Air quality text, present on richer pages.
    pub air_quality: Option<String>,

    /// UV index text, present on richer pages.
    pub uv_index: Option<String>,
}

impl WeatherRecord {
    /// Whether the record carries at least one identifying signal.
    ///
    /// A record with neither a date nor a condition says nothing useful
    /// about any forecast day; strategies that enforce the identity rule
    /// drop such records before returning.
    pub fn has_identity(&self) -> bool {
        !self.date.is_empty() || !self.condition.is_empty()
    }

    /// Serializes the record to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.day_of_week {
            Some(day) => write!(f, "{}({})", self.date, day)?,
            None => write!(f, "{}", self.date)?,
        }
        write!(f, " | {} | {}", self.condition, self.temperature)?;
        if let Some(humidity) = &self.humidity {
            write!(f, " | humidity {}", humidity)?;
        }
        if let Some(wind) = &self.wind {
            write!(f, " | {}", wind)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_requires_date_or_condition() {
        let record = WeatherRecord { temperature: "26~31°C".to_string(), ..Default::default() };
        assert!(!record.has_identity());

        let record = WeatherRecord { date: "周三".to_string(), ..Default::default() };
        assert!(record.has_identity());

        let record = WeatherRecord { condition: "晴".to_string(), ..Default::default() };
        assert!(record.has_identity());
    }

    #[test]
    fn test_display_with_optional_fields() {
        let record = WeatherRecord {
            date: "3月5日".to_string(),
            day_of_week: Some("周三".to_string()),
            condition: "多云".to_string(),
            temperature: "26~31°C".to_string(),
            wind: Some("北风3级".to_string()),
            ..Default::default()
        };

        let rendered = record.to_string();
        assert_eq!(rendered, "3月5日(周三) | 多云 | 26~31°C | 北风3级");
    }

    #[test]
    fn test_to_json_round_trips_fields() {
        let record = WeatherRecord {
            date: "周三".to_string(),
            condition: "晴".to_string(),
            ..Default::default()
        };

        let json = record.to_json();
        assert_eq!(json["date"], "周三");
        assert_eq!(json["condition"], "晴");
        assert!(json["humidity"].is_null());
    }
}
