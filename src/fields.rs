//! Pattern-based field mining from freeform text.
//!
//! These extractors pull individual forecast fields out of unstructured
//! text such as a list item's flattened content. Each extractor is
//! independent: one failing never prevents another from succeeding, and a
//! miss is an empty result rather than an error.

use regex::Regex;
use std::sync::OnceLock;

/// Keywords and glyphs that mark a piece of text as weather-related.
const WEATHER_KEYWORDS: &str = "晴|雨|阴|云|雪|风|℃|°C|温度";

/// The condition vocabulary; first match at the leftmost position wins.
const CONDITION_VOCAB: &str = "晴|多云|阴|雨|雪";

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(WEATHER_KEYWORDS).unwrap())
}

fn condition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CONDITION_VOCAB).unwrap())
}

fn temp_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+~\d+\s*(?:°C|℃)").unwrap())
}

fn temp_single_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+\s*(?:°C|℃)").unwrap())
}

fn month_day_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+月\d+日").unwrap())
}

fn weekday_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("周[一二三四五六日]").unwrap())
}

/// Whether the text contains any weather keyword or glyph.
///
/// This is the candidate classifier for the list-based fallback: it is
/// deliberately looser than the condition vocabulary, so a positive here
/// does not guarantee that any individual extractor will succeed.
pub fn is_weather_text(text: &str) -> bool {
    keyword_re().is_match(text)
}

/// Extracts a temperature token from the text.
///
/// Prefers a `N~M°C` range over a single `N°C` reading; both glyph
/// spellings (`°C`, `℃`) are accepted. Returns an empty string on a miss.
pub fn extract_temperature(text: &str) -> String {
    if let Some(m) = temp_range_re().find(text) {
        return m.as_str().to_string();
    }
    if let Some(m) = temp_single_re().find(text) {
        return m.as_str().to_string();
    }
    String::new()
}

/// Extracts the first condition word from the fixed vocabulary.
///
/// Returns an empty string when none of the vocabulary appears.
pub fn extract_condition(text: &str) -> String {
    condition_re().find(text).map(|m| m.as_str().to_string()).unwrap_or_default()
}

/// Extracts a date token from the text.
///
/// Prefers a numeric month-day (`3月5日`) over a weekday name (`周三`).
/// Returns an empty string on a miss.
pub fn extract_date(text: &str) -> String {
    if let Some(m) = month_day_re().find(text) {
        return m.as_str().to_string();
    }
    if let Some(m) = weekday_re().find(text) {
        return m.as_str().to_string();
    }
    String::new()
}

/// Extracts the weekday token, if present.
pub fn extract_day_of_week(text: &str) -> Option<String> {
    weekday_re().find(text).map(|m| m.as_str().to_string())
}
