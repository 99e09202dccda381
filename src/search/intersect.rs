// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted multi-list intersection: the AND in a multi-token query.
//!
//! Every input is an ascending, duplicate-free posting list. A single cursor
//! walks the lists round-robin. The current candidate must be confirmed by
//! each of the other N−1 lists in turn; a list that overshoots offers its
//! value as the new candidate and the round starts over from the next list.
//!
//! ```text
//! lists:  [1 3 5 7]  [3 4 5]  [0 5 9]
//! cand 1 → list1 overshoots to 3 → list2 overshoots to 5 → list0 has 5
//!        → list1 has 5 → emit 5 → list2 offers 9 → list0 exhausted → done
//! ```
//!
//! Each advance moves one cursor forward, so the whole iteration is
//! O(total postings). Nothing is allocated beyond the cursor vector.
//!
//! **Invariant**: inputs must be strictly ascending. Unsorted input gives
//! garbage, not a panic.

use crate::inverted::DocId;

/// Lazy intersection of N sorted posting lists.
///
/// Finite and not restartable: once `next` returns `None` it keeps doing so.
#[derive(Debug)]
pub struct SortedIntersection<'a> {
    lists: Vec<&'a [DocId]>,
    positions: Vec<usize>,
    /// Next list in the rotation.
    cursor: usize,
    /// Pending candidate from the previous emit, if any.
    candidate: Option<DocId>,
    exhausted: bool,
}

impl<'a> SortedIntersection<'a> {
    pub fn new(lists: Vec<&'a [DocId]>) -> Self {
        let n = lists.len();
        let mut it = Self {
            positions: vec![0; n],
            cursor: if n == 0 { 0 } else { 1 % n },
            candidate: None,
            exhausted: n == 0,
            lists,
        };
        if !it.exhausted {
            it.candidate = it.pull(0);
            it.exhausted = it.candidate.is_none();
        }
        it
    }

    /// Take the next value from list `i`.
    #[inline]
    fn pull(&mut self, i: usize) -> Option<DocId> {
        let value = self.lists[i].get(self.positions[i]).copied();
        if value.is_some() {
            self.positions[i] += 1;
        }
        value
    }

    /// Take the next value from list `i` that is `>= target`.
    #[inline]
    fn seek(&mut self, i: usize, target: DocId) -> Option<DocId> {
        loop {
            let value = self.pull(i)?;
            if value >= target {
                return Some(value);
            }
        }
    }

    #[inline]
    fn rotate(&mut self) -> usize {
        let current = self.cursor;
        self.cursor = (self.cursor + 1) % self.lists.len();
        current
    }
}

impl Iterator for SortedIntersection<'_> {
    type Item = DocId;

    fn next(&mut self) -> Option<DocId> {
        if self.exhausted {
            return None;
        }

        let mut candidate = match self.candidate.take() {
            Some(c) => c,
            None => {
                let list = self.rotate();
                match self.pull(list) {
                    Some(c) => c,
                    None => {
                        self.exhausted = true;
                        return None;
                    }
                }
            }
        };

        let others = self.lists.len() - 1;
        let mut confirmed = 0;
        while confirmed < others {
            let list = self.rotate();
            match self.seek(list, candidate) {
                None => {
                    self.exhausted = true;
                    return None;
                }
                // INVARIANT: emit only after all N−1 other lists confirm
                Some(value) if value == candidate => confirmed += 1,
                Some(value) => {
                    candidate = value;
                    confirmed = 0;
                }
            }
        }

        Some(candidate)
    }
}

/// Collect the intersection of `lists` into a vector.
pub fn intersect(lists: Vec<&[DocId]>) -> Vec<DocId> {
    SortedIntersection::new(lists).collect()
}
