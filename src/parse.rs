//! HTML parsing and DOM queries.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying the resulting tree with CSS selectors. They wrap
//! `scraper` and normalize extracted text the way extraction strategies
//! expect it (collapsed whitespace, trimmed).
//!
//! # Example
//!
//! ```rust
//! use skyscrape::parse::Document;
//!
//! let html = r#"<div class="forecast_item"><div class="date">3月5日</div></div>"#;
//! let doc = Document::parse(html);
//! let items = doc.select("div.forecast_item").unwrap();
//! assert_eq!(items[0].select("div.date").unwrap()[0].text(), "3月5日");
//! ```

use scraper::{Html, Selector};

use crate::{Result, SkyscrapeError};

/// Represents a parsed HTML document.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors. Parsing itself never fails; `scraper` recovers from
/// arbitrarily malformed markup, which is exactly what a best-effort
/// extractor wants.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Malformed markup is repaired rather than rejected, so this always
    /// produces a usable (possibly mostly empty) document.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// Selector lists (`"div.date, span.date"`) are supported.
    ///
    /// # Errors
    ///
    /// Returns [`SkyscrapeError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| SkyscrapeError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// A wrapper around scraper's ElementRef.
///
/// Element represents a single node in the document tree and provides
/// access to its normalized text, attributes, and scoped sub-queries.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the flattened text content of this element.
    ///
    /// Text nodes are joined and runs of whitespace collapse to a single
    /// space, so `"周三\n  多云"` comes back as `"周三 多云"`.
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self.element.text().flat_map(str::split_whitespace).collect();
        parts.join(" ")
    }

    /// Gets the value of an attribute, or `None` if absent.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// The query is scoped to this element's subtree only.
    ///
    /// # Errors
    ///
    /// Returns [`SkyscrapeError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel =
            Selector::parse(selector).map_err(|e| SkyscrapeError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}
