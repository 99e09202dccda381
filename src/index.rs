// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus index: two field indices and the correction catalogue.
//!
//! ```text
//! Documents ──┬── titles ──▶ title_index ──┐
//!             │                            ├──▶ token_catalogue
//!             └── bodies ──▶ body_index  ──┘
//! ```
//!
//! The catalogue is the search order for typo correction. Title tokens come
//! first, most frequent first; body-only tokens follow in the same order. A
//! misspelling that is one edit from both a common title word and a rare
//! body word gets the title word.

use crate::inverted::{build_inverted_index, InvertedIndex};
use crate::types::Document;
use std::cmp::Reverse;
use std::fmt;

/// One catalogue entry: a token and how many documents it appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub token: String,
    pub postings: usize,
}

/// Built once at startup, read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    title_index: InvertedIndex,
    body_index: InvertedIndex,
    token_catalogue: Vec<CatalogueEntry>,
    documents: usize,
}

/// Summary numbers for `inspect` and the ready log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub documents: usize,
    pub title_tokens: usize,
    pub body_tokens: usize,
    pub catalogue_len: usize,
    pub total_postings: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} documents, {} title tokens, {} body tokens, {} catalogue entries, {} postings",
            self.documents, self.title_tokens, self.body_tokens, self.catalogue_len, self.total_postings
        )
    }
}

#[cfg(feature = "parallel")]
fn build_field_indices(titles: &[&str], bodies: &[&str]) -> (InvertedIndex, InvertedIndex) {
    rayon::join(|| build_inverted_index(titles), || build_inverted_index(bodies))
}

/// Sequential version for builds without rayon.
#[cfg(not(feature = "parallel"))]
fn build_field_indices(titles: &[&str], bodies: &[&str]) -> (InvertedIndex, InvertedIndex) {
    (build_inverted_index(titles), build_inverted_index(bodies))
}

/// Title tokens by descending posting count, then body-only tokens likewise.
/// Ties go to the lexicographically smaller token.
fn build_catalogue(title_index: &InvertedIndex, body_index: &InvertedIndex) -> Vec<CatalogueEntry> {
    fn ranked<'a>(entries: impl Iterator<Item = (&'a str, usize)>) -> Vec<CatalogueEntry> {
        let mut entries: Vec<(&str, usize)> = entries.collect();
        entries.sort_unstable_by_key(|&(token, postings)| (Reverse(postings), token));
        entries
            .into_iter()
            .map(|(token, postings)| CatalogueEntry {
                token: token.to_string(),
                postings,
            })
            .collect()
    }

    // INVARIANT: title tokens precede body-only tokens
    let mut catalogue = ranked(title_index.iter().map(|(t, p)| (t, p.len())));
    catalogue.extend(ranked(
        body_index
            .iter()
            .filter(|(t, _)| !title_index.contains(t))
            .map(|(t, p)| (t, p.len())),
    ));
    catalogue
}

impl CorpusIndex {
    /// Index documents in ordinal order. `docs[i].ordinal` must equal `i`.
    pub fn build(docs: &[Document]) -> Self {
        debug_assert!(docs.iter().enumerate().all(|(i, d)| d.ordinal as usize == i));

        let titles: Vec<&str> = docs.iter().map(|d| d.title.as_str()).collect();
        let bodies: Vec<&str> = docs.iter().map(|d| d.body.as_str()).collect();
        let (title_index, body_index) = build_field_indices(&titles, &bodies);
        let token_catalogue = build_catalogue(&title_index, &body_index);

        Self {
            title_index,
            body_index,
            token_catalogue,
            documents: docs.len(),
        }
    }

    #[inline]
    pub fn title_index(&self) -> &InvertedIndex {
        &self.title_index
    }

    #[inline]
    pub fn body_index(&self) -> &InvertedIndex {
        &self.body_index
    }

    /// Correction candidates in priority order.
    #[inline]
    pub fn token_catalogue(&self) -> &[CatalogueEntry] {
        &self.token_catalogue
    }

    #[inline]
    pub fn document_count(&self) -> usize {
        self.documents
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents,
            title_tokens: self.title_index.len(),
            body_tokens: self.body_index.len(),
            catalogue_len: self.token_catalogue.len(),
            total_postings: self.title_index.total_postings() + self.body_index.total_postings(),
        }
    }
}
