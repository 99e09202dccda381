// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! One index per field: token → ascending, distinct document ordinals.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: Each posting list is strictly increasing
//! 2. **NON_EMPTY**: Every token has at least one posting
//! 3. **IN_RANGE**: Every ordinal is below the document count
//! 4. **NO_EMPTY_TOKEN**: The empty string is never a key
//!
//! The intersection in [`crate::search::intersect`] relies on (1); break it
//! and AND queries silently drop matches.

use crate::text::tokenize;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Document ordinal: position in the corpus, stable for the process lifetime.
pub type DocId = u32;

/// Below this many documents, reserve 4 slots per document; above, 2.
const LARGE_CORPUS_DOCS: usize = 10_000;
const MIN_CAPACITY: usize = 1024;

/// Token → posting list for one field across the corpus.
///
/// Built once by [`build_inverted_index`], read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, Vec<DocId>>,
}

impl InvertedIndex {
    /// Posting list for an exact (already normalized) token.
    #[inline]
    pub fn get(&self, token: &str) -> Option<&[DocId]> {
        self.terms.get(token).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains_key(token)
    }

    /// Number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// (token, posting list) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocId])> {
        self.terms.iter().map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    /// Sum of all posting list lengths.
    pub fn total_postings(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }
}

fn initial_capacity(doc_count: usize) -> usize {
    let scaled = if doc_count >= LARGE_CORPUS_DOCS {
        doc_count.saturating_mul(2)
    } else {
        doc_count.saturating_mul(4)
    };
    scaled.max(MIN_CAPACITY)
}

/// Distinct tokens of one document, in first-occurrence order.
fn document_tokens(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|token| !token.is_empty() && seen.insert(token.clone()))
        .collect()
}

#[cfg(feature = "parallel")]
fn tokenize_all<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Vec<String>> {
    texts.par_iter().map(|t| document_tokens(t.as_ref())).collect()
}

/// Sequential version for builds without rayon.
#[cfg(not(feature = "parallel"))]
fn tokenize_all<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Vec<String>> {
    texts.iter().map(|t| document_tokens(t.as_ref())).collect()
}

/// Build an inverted index from one field of every document.
///
/// `texts[i]` is the field text of document `i`. Tokenization happens per
/// document (in parallel with the `parallel` feature); the merge is
/// sequential in ordinal order so posting lists come out ascending already.
/// They are still sorted at the end to keep POSTING_LIST_SORTED independent
/// of merge order.
pub fn build_inverted_index<S: AsRef<str> + Sync>(texts: &[S]) -> InvertedIndex {
    let mut terms: HashMap<String, Vec<DocId>> = HashMap::with_capacity(initial_capacity(texts.len()));

    for (ordinal, tokens) in tokenize_all(texts).into_iter().enumerate() {
        let doc_id = ordinal as DocId;
        for token in tokens {
            terms.entry(token).or_default().push(doc_id);
        }
    }

    // INVARIANT: POSTING_LIST_SORTED
    for postings in terms.values_mut() {
        postings.sort_unstable();
    }

    InvertedIndex { terms }
}

/// Check if an inverted index is well-formed (debug/test helper).
pub fn check_inverted_index_well_formed(index: &InvertedIndex, doc_count: usize) -> bool {
    index.iter().all(|(token, postings)| {
        !token.is_empty()
            && !postings.is_empty()
            && postings.windows(2).all(|w| w[0] < w[1])
            && postings.iter().all(|&id| (id as usize) < doc_count)
    })
}
