// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::inverted::DocId;
use crate::types::{Document, RawPage};

/// Create a document with a predictable url (`/doc/{ordinal}`).
pub fn make_doc(ordinal: DocId, title: &str, body: &str) -> Document {
    make_doc_with_url(ordinal, title, body, &format!("/doc/{}", ordinal))
}

pub fn make_doc_with_url(ordinal: DocId, title: &str, body: &str, url: &str) -> Document {
    Document {
        ordinal,
        title: title.to_string(),
        body: body.to_string(),
        url: url.to_string(),
    }
}

/// Documents from (title, body) pairs, ordinals in slice order.
pub fn make_docs(pages: &[(&str, &str)]) -> Vec<Document> {
    pages
        .iter()
        .enumerate()
        .map(|(i, (title, body))| make_doc(i as DocId, title, body))
        .collect()
}

/// A crawled page with a minimal HTML shell around `title` and `body`.
pub fn make_html_page(url: &str, title: &str, body: &str) -> RawPage {
    RawPage::new(
        url,
        format!("<html><head><title>{}</title></head><body><p>{}</p></body></html>", title, body),
    )
}

/// The two-page corpus used throughout the docs: "dogs" hits page `a` in
/// its title and page `b` in its body.
pub fn pets_corpus() -> Vec<Document> {
    vec![
        make_doc_with_url(0, "Cats and Dogs", "Cats are great pets", "a"),
        make_doc_with_url(1, "Birds", "Birds fly high, dogs watch", "b"),
    ]
}
