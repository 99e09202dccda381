// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Priority-preserving union of ordinal lists.
//!
//! Title matches before body matches, uncorrected matches before corrected
//! ones: both are "keep everything from the first list, then whatever the
//! second list adds". A document appears at most once.

use crate::inverted::DocId;
use std::collections::HashSet;

/// `first ++ (second − first)`, order of both preserved.
pub fn append_new(mut first: Vec<DocId>, second: &[DocId]) -> Vec<DocId> {
    if second.is_empty() {
        return first;
    }
    if first.is_empty() {
        return second.to_vec();
    }

    // INVARIANT: each ordinal appears at most once
    let seen: HashSet<DocId> = first.iter().copied().collect();
    first.extend(second.iter().copied().filter(|id| !seen.contains(id)));
    first
}
