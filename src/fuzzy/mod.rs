// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The correction path only ever asks "is this catalogue token exactly one
//! edit away?", so a bounded predicate does the heavy lifting and the full
//! distance is kept for tests and diagnostics.

mod levenshtein;

pub use levenshtein::*;
