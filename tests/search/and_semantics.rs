//! Multi-token queries: every known token must match.

use crate::common::{engine_from_pages, urls};

#[test]
fn all_tokens_required() {
    let engine = engine_from_pages(&[("z", "red apple pie"), ("z", "green apple"), ("z", "red car")]);
    assert_eq!(urls(&engine.search("red apple")), vec!["/doc/0"]);
    assert_eq!(urls(&engine.search("apple")), vec!["/doc/0", "/doc/1"]);
}

#[test]
fn query_order_and_repeats_do_not_matter() {
    let engine = engine_from_pages(&[("z", "red apple pie"), ("z", "green apple")]);
    let a = urls(&engine.search("apple red"));
    let b = urls(&engine.search("red apple apple"));
    assert_eq!(a, b);
}

#[test]
fn unknown_tokens_are_ignored() {
    let engine = engine_from_pages(&[("z", "red apple"), ("z", "green apple")]);
    assert_eq!(urls(&engine.search("apple xylophone")), vec!["/doc/0", "/doc/1"]);
}

#[test]
fn three_way_intersection() {
    let engine = engine_from_pages(&[
        ("z", "alpha beta gamma"),
        ("z", "alpha beta"),
        ("z", "beta gamma"),
        ("z", "alpha gamma beta delta"),
    ]);
    assert_eq!(urls(&engine.search("gamma alpha beta")), vec!["/doc/0", "/doc/3"]);
}

#[test]
fn punctuation_in_query_is_a_separator() {
    let engine = engine_from_pages(&[("z", "red apple pie"), ("z", "green apple")]);
    assert_eq!(urls(&engine.search("red,apple!")), vec!["/doc/0"]);
}
