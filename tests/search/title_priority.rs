//! Title matches rank ahead of body matches, and a page is listed once.

use crate::common::{engine_from_pages, pets_engine, titles, urls};

#[test]
fn title_match_before_body_match() {
    let engine = pets_engine();
    let result = engine.search("dogs");
    assert_eq!(urls(&result), vec!["a", "b"]);
}

#[test]
fn title_block_keeps_corpus_order() {
    let engine = engine_from_pages(&[
        ("rust body", "nothing"),
        ("other", "rust here"),
        ("rust again", "rust too"),
        ("last", "rust at the end"),
    ]);
    let result = engine.search("rust");
    // Titles [0, 2], then body-only [1, 3]; doc 2 is not repeated
    assert_eq!(urls(&result), vec!["/doc/0", "/doc/2", "/doc/1", "/doc/3"]);
}

#[test]
fn body_only_hit() {
    let engine = pets_engine();
    let result = engine.search("watch");
    assert_eq!(urls(&result), vec!["b"]);
    assert_eq!(titles(&result), vec!["Birds"]);
}

#[test]
fn multi_token_title_hit() {
    let engine = engine_from_pages(&[("x", "cats and dogs"), ("cats and dogs", "x")]);
    let result = engine.search("dogs cats");
    assert_eq!(urls(&result), vec!["/doc/1", "/doc/0"]);
}
