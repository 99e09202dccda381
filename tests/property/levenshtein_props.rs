//! Edit distance property tests against the full-matrix oracle.

use crate::oracles::oracle_levenshtein;
use crate::strategies::word_strategy;
use proptest::prelude::*;
use searchit::{is_single_edit, levenshtein, levenshtein_within};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_levenshtein_matches_oracle(a in "\\PC{0,8}", b in "\\PC{0,8}") {
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_within_agrees_with_distance(a in word_strategy(), b in word_strategy(), max in 0usize..4) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), oracle_levenshtein(&a, &b) <= max);
    }

    #[test]
    fn prop_single_edit_means_distance_one(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(is_single_edit(&a, &b), oracle_levenshtein(&a, &b) == 1);
    }

    #[test]
    fn prop_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }
}
