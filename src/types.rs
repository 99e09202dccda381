// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the corpus and the query wire format.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Document**: `ordinal` is the position in the corpus and never changes
//!   after load. Every posting list in both field indices stores ordinals, so
//!   reordering documents after indexing returns the wrong pages.
//!
//! - **SearchItem**: `description` is at most `descriptionMaxChars` chars of
//!   the body, cut on a char boundary.
//!
//! - **SearchResponse**: success and error are mutually exclusive. A failed
//!   query never carries partial items.
//!
//! Field names on the wire are camelCase (`durationMs`, `resultCount`,
//! `errorMessage`); the Rust side stays snake_case.

use crate::inverted::DocId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// CORPUS
// =============================================================================

/// A crawled page as the corpus source hands it over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPage {
    pub url: String,
    /// Raw markup (or plain text, depending on the extractor in use).
    #[serde(alias = "content")]
    pub html: String,
}

impl RawPage {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            html: html.into(),
        }
    }
}

/// Title and body text pulled out of a raw page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedText {
    pub title: String,
    pub body: String,
}

/// An indexed page. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Position in the corpus.
    pub ordinal: DocId,
    pub title: String,
    pub body: String,
    pub url: String,
}

// =============================================================================
// RESULTS
// =============================================================================

/// One hit, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub url: String,
    pub title: String,
    pub description: String,
}

impl SearchItem {
    /// Derive the display item for a document; the body is cut to
    /// `max_description_chars` chars.
    pub fn from_document(doc: &Document, max_description_chars: usize) -> Self {
        Self {
            url: doc.url.clone(),
            title: doc.title.clone(),
            description: truncate_chars(&doc.body, max_description_chars).to_string(),
        }
    }
}

/// Longest prefix of `s` holding at most `max` chars.
pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Timing and size of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultStats {
    pub duration_ms: u64,
    pub result_count: usize,
}

/// Items in title-then-body order, plus stats.
///
/// `items` is shared with the cache, so a cache hit costs a refcount bump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Arc<[SearchItem]>,
    pub stats: ResultStats,
}

impl SearchResult {
    /// No items, zero stats. What a blank query gets.
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
            stats: ResultStats::default(),
        }
    }
}

/// Response envelope at the request boundary.
///
/// ```json
/// {"type":"success","data":{"items":[...],"stats":{"durationMs":3,"resultCount":2}}}
/// {"type":"error","errorMessage":"..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResponse {
    Success {
        data: SearchResult,
    },
    Error {
        #[serde(rename = "errorMessage")]
        error_message: String,
    },
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResponse::Success { .. })
    }
}
