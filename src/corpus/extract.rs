// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Title/body extraction from crawled pages.

use super::TextExtractor;
use crate::types::ExtractedText;
use scraper::{Html, Selector};

/// Elements whose text never reaches a reader.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Collapse runs of whitespace into single spaces and trim.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// HTML pages: `<title>` text plus visible `<body>` text.
///
/// The parser accepts any input, so this never rejects a page. A page with
/// no text is kept with an empty title and body; it still takes an ordinal
/// and still becomes a search item, it just never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }

    fn title(document: &Html) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let element = document.select(&selector).next()?;
        Some(collapse_whitespace(&element.text().collect::<String>()))
    }

    fn body(document: &Html) -> Option<String> {
        let selector = Selector::parse("body").ok()?;
        let body = document.select(&selector).next()?;

        let mut pieces = Vec::new();
        for node in body.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element())
                .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()));
            if !hidden {
                pieces.push(&**text);
            }
        }
        Some(collapse_whitespace(&pieces.join(" ")))
    }
}

impl TextExtractor for HtmlExtractor {
    fn extract(&self, raw: &str) -> Option<ExtractedText> {
        let document = Html::parse_document(raw);
        Some(ExtractedText {
            title: Self::title(&document).unwrap_or_default(),
            body: Self::body(&document).unwrap_or_default(),
        })
    }
}

/// Plain text pages: first non-blank line is the title, the rest is the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, raw: &str) -> Option<ExtractedText> {
        let trimmed = raw.trim_start();
        if trimmed.is_empty() {
            return None;
        }
        let (title, body) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
        Some(ExtractedText {
            title: title.trim().to_string(),
            body: body.trim().to_string(),
        })
    }
}
