//! Search edge cases: blank queries, empty corpora, odd input.

use crate::common::{engine_from, engine_from_pages, pets_engine};

#[test]
fn blank_queries_return_nothing() {
    let engine = pets_engine();
    for query in ["", " ", "\t\n  "] {
        let result = engine.search(query);
        assert!(result.items.is_empty());
        assert_eq!(result.stats.duration_ms, 0);
        assert_eq!(result.stats.result_count, 0);
    }
    assert_eq!(engine.metrics().computations, 0);
}

#[test]
fn punctuation_only_query() {
    let engine = pets_engine();
    let result = engine.search("?!?!");
    assert!(result.items.is_empty());
    assert_eq!(result.stats.result_count, 0);
}

#[test]
fn empty_corpus() {
    let engine = engine_from(Vec::new());
    assert!(engine.is_empty());
    assert!(engine.search("anything").items.is_empty());
}

#[test]
fn pages_with_empty_title() {
    let engine = engine_from_pages(&[("", "only a body"), ("title", "")]);
    assert_eq!(engine.search("body").items.len(), 1);
    assert_eq!(engine.search("title").items.len(), 1);
}

#[test]
fn very_long_query() {
    let engine = pets_engine();
    let query = "dogs ".repeat(200);
    let result = engine.search(&query);
    assert_eq!(result.stats.result_count, 2);
}

#[test]
fn case_and_script_insensitive() {
    let engine = engine_from_pages(&[("كتاب", "x"), ("Dogs", "y")]);
    assert_eq!(engine.search("کتاب").items.len(), 1);
    assert_eq!(engine.search("DOGS").items.len(), 1);
}
