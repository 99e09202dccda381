// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary byte sequences at a small multilingual engine. A query
//! must never panic, never return a page twice, and never point outside the
//! corpus. Running the same query twice (once computed, once cached) must
//! give the same answer.

#![no_main]

use libfuzzer_sys::fuzz_target;
use searchit::testing::make_docs;
use searchit::{EngineConfig, QueryEngine};
use std::collections::HashSet;
use std::sync::OnceLock;

fn engine() -> &'static QueryEngine {
    static ENGINE: OnceLock<QueryEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        let docs = make_docs(&[
            ("Cats and Dogs", "Cats are great pets"),
            ("Birds", "Birds fly high, dogs watch"),
            ("کتاب فارسی", "سال ۱۴۰۲ در تهران"),
            ("ПРИВЕТ мир", "город и мир"),
            ("İstanbul 你好", "世界 和平"),
        ]);
        QueryEngine::from_documents(docs, EngineConfig::default()).expect("default config is valid")
    })
}

fuzz_target!(|query: &[u8]| {
    let engine = engine();
    let query = String::from_utf8_lossy(query);

    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: search never panics
    let first = engine.search(&query);
    let second = engine.search(&query);

    // INVARIANT 2: deterministic, cached or not
    assert_eq!(first.items, second.items);

    // INVARIANT 3: every url is a real page, and no page repeats
    let mut seen = HashSet::new();
    for item in first.items.iter() {
        assert!(item.url.starts_with("/doc/"), "unexpected url {}", item.url);
        assert!(seen.insert(item.url.clone()), "duplicate {}", item.url);
    }
    assert!(first.items.len() <= engine.len());
    assert_eq!(first.stats.result_count, first.items.len());

    // INVARIANT 4: blank queries find nothing
    if query.trim().is_empty() {
        assert!(first.items.is_empty());
    }

    // INVARIANT 5: the envelope always serializes
    assert!(serde_json::to_string(&engine.respond(&query)).is_ok());
});
