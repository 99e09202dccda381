// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query resolution: where the rubber meets the road.
//!
//! A query is a bag of normalized tokens with AND semantics, resolved
//! against the title index and the body index separately. Title hits always
//! come first; a page that matches in both fields shows up once, in the title
//! block.
//!
//! # Typo correction
//!
//! Each index gets one shot at fixing one token. The token to fix is the
//! matched token with the smallest posting list (the one most likely to be a
//! rare misspelling of something common), falling back to the first query
//! token when nothing matched. It is swapped for the first catalogue token
//! exactly one edit away, and the query runs again. Corrected hits are
//! appended after the uncorrected ones, never interleaved.
//!
//! Tokens missing from an index are dropped before intersecting, so
//! `"dogs xyzzy"` behaves like `"dogs"`. Strict AND would make one stray
//! token zero out every query.

pub mod intersect;
pub mod merge;

pub use intersect::{intersect, SortedIntersection};
pub use merge::append_new;

use crate::fuzzy::is_single_edit;
use crate::index::CorpusIndex;
use crate::inverted::{DocId, InvertedIndex};

/// (query token, posting list) pairs present in an index, sorted by token.
fn lookup<'q, 'i>(query_tokens: &'q [String], index: &'i InvertedIndex) -> Vec<(&'q str, &'i [DocId])> {
    let mut sorted: Vec<&str> = query_tokens.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
        .into_iter()
        .filter_map(|token| index.get(token).map(|postings| (token, postings)))
        .collect()
}

fn intersect_matched(matched: &[(&str, &[DocId])]) -> Vec<DocId> {
    intersect(matched.iter().map(|&(_, postings)| postings).collect())
}

#[inline]
fn correctable(token: &str) -> bool {
    token.chars().count() > 1
}

/// The token most worth correcting, if any.
fn correction_candidate<'q>(matched: &[(&'q str, &[DocId])], query_tokens: &'q [String]) -> Option<&'q str> {
    matched
        .iter()
        .filter(|(token, _)| correctable(token))
        .min_by_key(|(_, postings)| postings.len())
        .map(|&(token, _)| token)
        .or_else(|| query_tokens.iter().map(String::as_str).find(|t| correctable(t)))
}

/// Resolves token lists to document ordinals over a [`CorpusIndex`].
#[derive(Debug, Clone)]
pub struct Resolver {
    index: CorpusIndex,
}

impl Resolver {
    pub fn new(index: CorpusIndex) -> Self {
        Self { index }
    }

    #[inline]
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Title matches, then body matches not already listed.
    pub fn find_matching(&self, query_tokens: &[String]) -> Vec<DocId> {
        let title = self.match_single_index(query_tokens, self.index.title_index());
        let body = self.match_single_index(query_tokens, self.index.body_index());
        log::debug!(
            "query {:?}: {} title matches, {} body matches",
            query_tokens,
            title.len(),
            body.len()
        );
        append_new(title, &body)
    }

    /// Resolve against one field index, with at most one single-token correction.
    pub fn match_single_index(&self, query_tokens: &[String], index: &InvertedIndex) -> Vec<DocId> {
        let matched = lookup(query_tokens, index);
        let original = intersect_matched(&matched);

        let Some(candidate) = correction_candidate(&matched, query_tokens) else {
            return original;
        };
        let Some(replacement) = self.correction_for(candidate) else {
            return original;
        };

        let mut corrected_tokens = query_tokens.to_vec();
        if let Some(slot) = corrected_tokens.iter_mut().find(|t| t.as_str() == candidate) {
            replacement.clone_into(slot);
        }
        log::info!("corrected {:?} to {:?}", candidate, replacement);

        let corrected = intersect_matched(&lookup(&corrected_tokens, index));
        append_new(original, &corrected)
    }

    /// First catalogue token exactly one edit from `token`.
    pub fn correction_for(&self, token: &str) -> Option<&str> {
        self.index
            .token_catalogue()
            .iter()
            .map(|entry| entry.token.as_str())
            .find(|candidate| is_single_edit(token, candidate))
    }
}
