// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for normalization.
//!
//! The index and the query path both trust `normalize` to be idempotent and
//! to never produce empty or padded tokens. Arbitrary Unicode is where case
//! mappings that expand into combining marks live.

#![no_main]

use libfuzzer_sys::fuzz_target;
use searchit::{normalize, tokenize};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let once = normalize(&text);

    // INVARIANT 1: idempotent
    assert_eq!(normalize(&once), once, "normalize not idempotent for {:?}", text);

    // INVARIANT 2: no leading, trailing, or doubled spaces
    assert!(!once.starts_with(' ') && !once.ends_with(' '), "padded output {:?}", once);
    assert!(!once.contains("  "), "doubled space in {:?}", once);

    // INVARIANT 3: tokens are the non-empty space-split pieces
    let tokens = tokenize(&text);
    assert!(tokens.iter().all(|t| !t.is_empty() && !t.contains(' ')));
    assert_eq!(tokens.join(" "), once);
});
