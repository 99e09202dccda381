// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the multi-list intersection.
//!
//! Compares the round-robin cursor walk against a set-based oracle. Inputs
//! are sorted and deduped first, since that is what posting lists look like.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use searchit::{intersect, DocId};
use std::collections::BTreeSet;

#[derive(Debug, Arbitrary)]
struct IntersectInput {
    lists: Vec<Vec<u16>>,
}

fuzz_target!(|input: IntersectInput| {
    // Cap list count to avoid timeouts
    let lists: Vec<Vec<DocId>> = input
        .lists
        .into_iter()
        .take(8)
        .map(|list| {
            let set: BTreeSet<DocId> = list.into_iter().map(DocId::from).collect();
            set.into_iter().collect()
        })
        .collect();

    let views: Vec<&[DocId]> = lists.iter().map(Vec::as_slice).collect();
    let result = intersect(views);

    let expected: Vec<DocId> = match lists.split_first() {
        None => Vec::new(),
        Some((first, rest)) => first
            .iter()
            .copied()
            .filter(|id| rest.iter().all(|list| list.binary_search(id).is_ok()))
            .collect(),
    };

    // INVARIANT 1: agrees with the oracle
    assert_eq!(result, expected);

    // INVARIANT 2: output is strictly ascending
    assert!(result.windows(2).all(|w| w[0] < w[1]));
});
