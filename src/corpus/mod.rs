// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where documents come from.
//!
//! Two seams: a [`CorpusSource`] hands over raw crawled pages, and a
//! [`TextExtractor`] turns each page into a title and a body. The engine
//! only ever sees the result of [`load_documents`], which glues the two
//! together and assigns ordinals.
//!
//! A page the extractor can't make sense of is dropped with a warning; a
//! source that can't be read at all is fatal.

mod extract;
mod json;

pub use extract::{HtmlExtractor, PlainTextExtractor};
pub use json::JsonLinesCorpus;

use crate::error::CorpusError;
use crate::inverted::DocId;
use crate::types::{Document, ExtractedText, RawPage};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Supplies every crawled page, in corpus order.
pub trait CorpusSource {
    fn load_all_pages(&self) -> Result<Vec<RawPage>, CorpusError>;
}

/// Pulls title and body text out of one raw page.
///
/// `None` means the page is unusable and should be skipped.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, raw: &str) -> Option<ExtractedText>;
}

/// Pages already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    pages: Vec<RawPage>,
}

impl MemoryCorpus {
    pub fn new(pages: Vec<RawPage>) -> Self {
        Self { pages }
    }
}

impl From<Vec<RawPage>> for MemoryCorpus {
    fn from(pages: Vec<RawPage>) -> Self {
        Self::new(pages)
    }
}

impl CorpusSource for MemoryCorpus {
    fn load_all_pages(&self) -> Result<Vec<RawPage>, CorpusError> {
        Ok(self.pages.clone())
    }
}

fn extract_one(page: &RawPage, extractor: &dyn TextExtractor) -> Option<(String, ExtractedText)> {
    match extractor.extract(&page.html) {
        Some(text) => Some((page.url.clone(), text)),
        None => {
            log::warn!("skipping {}: no extractable text", page.url);
            None
        }
    }
}

#[cfg(feature = "parallel")]
fn extract_all(pages: &[RawPage], extractor: &dyn TextExtractor) -> Vec<(String, ExtractedText)> {
    pages.par_iter().filter_map(|page| extract_one(page, extractor)).collect()
}

/// Sequential version for builds without rayon.
#[cfg(not(feature = "parallel"))]
fn extract_all(pages: &[RawPage], extractor: &dyn TextExtractor) -> Vec<(String, ExtractedText)> {
    pages.iter().filter_map(|page| extract_one(page, extractor)).collect()
}

/// Extract every page and number the survivors.
///
/// Order is preserved, so ordinals follow corpus order with gaps closed.
pub fn load_documents(pages: &[RawPage], extractor: &dyn TextExtractor) -> Vec<Document> {
    extract_all(pages, extractor)
        .into_iter()
        .enumerate()
        .map(|(i, (url, text))| Document {
            ordinal: i as DocId,
            title: text.title,
            body: text.body,
            url,
        })
        .collect()
}
