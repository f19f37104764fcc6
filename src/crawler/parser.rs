//! HTML parser for extracting anchor links and page text
//!
//! This module provides the parse collaborator the crawl engine depends on:
//! raw markup goes in, a list of raw href strings and the plain-text body
//! come out. Hrefs are returned exactly as written in the page; deciding
//! which of them to follow is the link normalizer's job.

use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone)]
pub struct ParsedPage {
    /// Raw href attributes of every anchor, in document order
    pub hrefs: Vec<String>,

    /// The plain text of the page body
    pub text: String,
}

/// Parse collaborator consumed by the crawl scheduler
pub trait PageParser: Send + Sync {
    /// Parses page markup into anchor hrefs and body text
    ///
    /// Malformed markup never fails: the HTML parser recovers what it can,
    /// and a page that yields nothing simply contributes nothing.
    fn parse(&self, html: &str) -> ParsedPage;
}

/// Production parser backed by scraper
pub struct HtmlParser;

impl PageParser for HtmlParser {
    fn parse(&self, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);

        ParsedPage {
            hrefs: extract_hrefs(&document),
            text: extract_body_text(&document),
        }
    }
}

/// Collects the raw href of every anchor element
fn extract_hrefs(document: &Html) -> Vec<String> {
    let Ok(selector) = Selector::parse("a") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts the plain text of the body, with element boundaries as spaces
fn extract_body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|body| body.text().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> ParsedPage {
        HtmlParser.parse(html)
    }

    #[test]
    fn test_extracts_raw_hrefs_in_order() {
        let html = r##"<html><body>
            <a href="/a">A</a>
            <a href="http://example.com/b">B</a>
            <a href="#frag">C</a>
        </body></html>"##;
        let parsed = parse(html);
        assert_eq!(parsed.hrefs, vec!["/a", "http://example.com/b", "#frag"]);
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<html><body><a name="marker">No href</a></body></html>"#;
        assert!(parse(html).hrefs.is_empty());
    }

    #[test]
    fn test_empty_href_skipped() {
        let html = r#"<html><body><a href="">Empty</a></body></html>"#;
        assert!(parse(html).hrefs.is_empty());
    }

    #[test]
    fn test_body_text_extracted() {
        let html = r#"<html><head><title>Ignored</title></head>
            <body><p>Hello</p><p>world</p></body></html>"#;
        let text = parse(html).text;
        assert!(text.contains("Hello"));
        assert!(text.contains("world"));
        assert!(!text.contains("Ignored"));
    }

    #[test]
    fn test_element_boundaries_separate_words() {
        let html = r#"<html><body><span>one</span><span>two</span></body></html>"#;
        let parsed = parse(html);
        let words: Vec<&str> = crate::words::tokenize(&parsed.text).collect();
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn test_malformed_markup_recovers() {
        let html = "<html><body><a href=/page>unclosed <p>text";
        let parsed = parse(html);
        assert_eq!(parsed.hrefs, vec!["/page"]);
        assert!(parsed.text.contains("text"));
    }

    #[test]
    fn test_empty_document() {
        let parsed = parse("");
        assert!(parsed.hrefs.is_empty());
        assert!(parsed.text.trim().is_empty());
    }
}
