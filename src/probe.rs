//! Structural diagnostics for pages nothing could be extracted from.
//!
//! The prober inspects a document for known candidate containers and
//! weather-looking markup, and reports what it found as a structured
//! [`ProbeReport`]. The report exists purely to help a human tune the
//! selector specs; it never influences which strategy runs, and nothing
//! in it is part of the programmatic extraction contract.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::parse::Document;

/// Container selectors worth checking on a typical weather page.
pub const CANDIDATE_CONTAINERS: &[&str] = &[
    "div.forecast",
    "div.weather",
    "div.wea_list",
    "ul.weather",
    "table",
    "div.days",
    "div.forecast-box",
    "div.week",
];

/// Longest text snippet quoted per matching div.
const SNIPPET_CHARS: usize = 50;

fn relevant_class_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("weather|forecast|day|date|temp").unwrap())
}

fn condition_glyph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("晴|雨|阴|云|雪").unwrap())
}

/// How many elements one candidate container selector matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerMatch {
    /// The candidate selector that was probed.
    pub selector: String,
    /// Number of matching elements (always at least 1 when reported).
    pub count: usize,
}

/// A div whose class attribute looks weather-related.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivSummary {
    /// The div's full class attribute.
    pub class_name: String,
    /// Leading text content, truncated to a short snippet.
    pub snippet: String,
}

/// Everything the structure prober observed about a document.
///
/// Serializable for hosts that want the diagnostics programmatically;
/// `Display` renders the traditional human-readable analysis for hosts
/// that just print it. Callers must not parse the rendered text.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProbeReport {
    /// Page title, when the document has one.
    pub title: Option<String>,
    /// Candidate container selectors that matched, with their counts.
    pub containers: Vec<ContainerMatch>,
    /// Divs whose class names suggest weather content.
    pub weather_divs: Vec<DivSummary>,
    /// `alt` texts of images that name a weather condition.
    pub weather_image_alts: Vec<String>,
}

impl ProbeReport {
    /// Whether the probe found anything at all worth reporting.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty() && self.weather_divs.is_empty() && self.weather_image_alts.is_empty()
    }
}

/// Inspects the document and reports candidate structure.
///
/// Never fails; a page with nothing recognizable produces a report whose
/// collections are all empty.
pub fn probe(doc: &Document) -> ProbeReport {
    let mut report = ProbeReport { title: doc.title(), ..Default::default() };

    for selector in CANDIDATE_CONTAINERS {
        if let Ok(matched) = doc.select(selector)
            && !matched.is_empty()
        {
            report
                .containers
                .push(ContainerMatch { selector: selector.to_string(), count: matched.len() });
        }
    }

    if let Ok(divs) = doc.select("div[class]") {
        for div in &divs {
            let Some(class_name) = div.attr("class") else {
                continue;
            };
            if !relevant_class_re().is_match(class_name) {
                continue;
            }

            let text = div.text();
            report.weather_divs.push(DivSummary {
                class_name: class_name.to_string(),
                snippet: text.chars().take(SNIPPET_CHARS).collect(),
            });
        }
    }

    if let Ok(images) = doc.select("img[alt]") {
        for image in &images {
            if let Some(alt) = image.attr("alt")
                && condition_glyph_re().is_match(alt)
            {
                report.weather_image_alts.push(alt.to_string());
            }
        }
    }

    report
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== page structure ===")?;
        if let Some(title) = &self.title {
            writeln!(f, "title: {}", title)?;
        }

        if self.containers.is_empty() {
            writeln!(f, "no candidate containers matched")?;
        }
        for c in &self.containers {
            writeln!(f, "container {}: {} element(s)", c.selector, c.count)?;
        }

        for div in &self.weather_divs {
            writeln!(f, "div.{}: {}", div.class_name, div.snippet)?;
        }
        for alt in &self.weather_image_alts {
            writeln!(f, "weather image: {}", alt)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROBE_HTML: &str = r#"
        <html>
        <head><title>某市天气</title></head>
        <body>
            <div class="weather-widget">今天 晴 20°C</div>
            <div class="sidebar">navigation</div>
            <table><tr><td>x</td></tr></table>
            <img src="a.png" alt="晴">
            <img src="b.png" alt="logo">
        </body>
        </html>
    "#;

    #[test]
    fn test_probe_reports_containers_and_title() {
        let doc = Document::parse(PROBE_HTML);
        let report = probe(&doc);

        assert_eq!(report.title.as_deref(), Some("某市天气"));
        assert!(
            report
                .containers
                .iter()
                .any(|c| c.selector == "table" && c.count == 1)
        );
    }

    #[test]
    fn test_probe_picks_weather_divs_and_alts() {
        let doc = Document::parse(PROBE_HTML);
        let report = probe(&doc);

        assert_eq!(report.weather_divs.len(), 1);
        assert_eq!(report.weather_divs[0].class_name, "weather-widget");
        assert!(report.weather_divs[0].snippet.contains("晴"));

        assert_eq!(report.weather_image_alts, vec!["晴".to_string()]);
    }

    #[test]
    fn test_probe_on_blank_page_is_empty() {
        let doc = Document::parse("<html><body><p>hello</p></body></html>");
        let report = probe(&doc);

        assert!(report.is_empty());
        assert_eq!(report.title, None);
    }

    #[test]
    fn test_display_rendering() {
        let doc = Document::parse(PROBE_HTML);
        let rendered = probe(&doc).to_string();

        assert!(rendered.contains("page structure"));
        assert!(rendered.contains("某市天气"));
        assert!(rendered.contains("table"));
        assert!(rendered.contains("weather-widget"));
    }

    #[test]
    fn test_snippet_is_truncated_on_char_boundary() {
        let long_text = "晴".repeat(200);
        let html = format!(r#"<div class="weather">{}</div>"#, long_text);
        let doc = Document::parse(&html);
        let report = probe(&doc);

        assert_eq!(report.weather_divs[0].snippet.chars().count(), SNIPPET_CHARS);
    }

    #[test]
    fn test_report_serializes() {
        let doc = Document::parse(PROBE_HTML);
        let json = serde_json::to_value(probe(&doc)).unwrap();

        assert!(json["containers"].is_array());
        assert_eq!(json["title"], "某市天气");
    }
}
