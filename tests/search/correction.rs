//! Single-token typo correction.

use crate::common::{engine_from_pages, urls};
use searchit::{CorpusIndex, Resolver};

fn resolver(pages: &[(&str, &str)]) -> Resolver {
    Resolver::new(CorpusIndex::build(&crate::common::make_docs(pages)))
}

#[test]
fn one_edit_is_corrected() {
    let engine = engine_from_pages(&[("apple", "fruit"), ("banana", "fruit")]);
    assert_eq!(urls(&engine.search("aple")), vec!["/doc/0"]);
}

#[test]
fn two_edits_are_not() {
    let engine = engine_from_pages(&[("apple", "fruit"), ("banana", "fruit")]);
    assert!(engine.search("apl").items.is_empty());
}

#[test]
fn insertion_deletion_substitution() {
    let r = resolver(&[("search", "x")]);
    assert_eq!(r.correction_for("serch"), Some("search"));
    assert_eq!(r.correction_for("searchh"), Some("search"));
    assert_eq!(r.correction_for("seerch"), Some("search"));
}

#[test]
fn corrected_results_follow_exact_results() {
    // "cart" matches doc 1 exactly; the correction to "cars" adds doc 0 after it
    let engine = engine_from_pages(&[("cars", "x"), ("cart", "y")]);
    let result = engine.search("cart");
    assert_eq!(urls(&result), vec!["/doc/1", "/doc/0"]);
}

#[test]
fn common_title_tokens_win_over_rare_ones() {
    // "bat" and "cat" are both one edit from "hat"; "cat" is in more titles
    let r = resolver(&[("bat", "x"), ("cat", "y"), ("cat", "z")]);
    assert_eq!(r.correction_for("hat"), Some("cat"));
}

#[test]
fn rarest_matched_token_is_the_one_corrected() {
    // "pets" is common, "dogz" isn't in the index at all; the candidate is
    // the rarest matched token "pets", which has no neighbour, so "dogz"
    // stays uncorrected and is simply dropped
    let engine = engine_from_pages(&[("pets dogs", "a"), ("pets", "b")]);
    assert_eq!(urls(&engine.search("pets dogz")), vec!["/doc/0", "/doc/1"]);
}

#[test]
fn unmatched_query_falls_back_to_first_token() {
    let engine = engine_from_pages(&[("house", "x"), ("mouse", "y")]);
    // "housr" matches nothing; first token gets corrected to "house"
    assert_eq!(urls(&engine.search("housr")), vec!["/doc/0"]);
}

#[test]
fn single_char_tokens_never_corrected() {
    let engine = engine_from_pages(&[("ab", "x")]);
    assert!(engine.search("b").items.is_empty());
}
