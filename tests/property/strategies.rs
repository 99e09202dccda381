//! Shared proptest strategies.
//!
//! Vocabularies are kept deliberately small so that random documents share
//! tokens and random queries actually hit something.

use proptest::prelude::*;

/// Short words over a five-letter alphabet: lots of collisions, lots of
/// one-edit neighbours.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{2,4}").unwrap()
}

/// Random document text (multiple words).
pub fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..8).prop_map(|words| words.join(" "))
}

/// Random corpus of single-field texts.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 0..8)
}

/// Random corpus of (title, body) pages.
pub fn pages_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop::collection::vec(word_strategy(), 0..3).prop_map(|w| w.join(" ")),
            document_strategy(),
        ),
        1..8,
    )
}

/// A query of one to three words.
pub fn query_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 1..4)
}

/// Ascending, duplicate-free posting list.
pub fn posting_list_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::btree_set(0u32..60, 0..25).prop_map(|set| set.into_iter().collect())
}

/// Text mixing Latin, Persian, Arabic variants, digits, punctuation and
/// zero-width characters.
pub fn mixed_script_strategy() -> impl Strategy<Value = String> {
    let pieces = prop::sample::select(vec![
        "Hello", "WORLD", "café", "İstanbul", "ΣΊΣΥΦΟΣ", "کتاب", "كتاب", "علي", "مدرسة", "١٢٣", "۴۵۶", "42",
        " ", "  ", "\t", "\n", ",", "!", "-", "_", "\u{200C}", "\u{200B}", "\u{FEFF}", "\u{202B}",
        "\u{0650}", "²", "Ⅳ",
    ]);
    prop::collection::vec(pieces, 0..12).prop_map(|p| p.concat())
}
