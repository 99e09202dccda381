//! Normalizer property tests.
//!
//! - Idempotence: normalizing twice changes nothing
//! - Shape: no leading, trailing or doubled spaces
//! - Tokens are non-empty runs of letters (L*) and decimal digits (Nd)
//! - Tokenizing raw text equals tokenizing its normalized form

use crate::strategies::mixed_script_strategy;
use proptest::prelude::*;
use searchit::{normalize, tokenize};
use unicode_general_category::{get_general_category, GeneralCategory};

fn is_word_char(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

fn check_shape(normalized: &str) -> Result<(), TestCaseError> {
    prop_assert!(!normalized.starts_with(' '), "leading space in {:?}", normalized);
    prop_assert!(!normalized.ends_with(' '), "trailing space in {:?}", normalized);
    prop_assert!(!normalized.contains("  "), "double space in {:?}", normalized);
    prop_assert!(
        normalized.chars().all(|c| c == ' ' || is_word_char(c)),
        "non-word char in {:?}",
        normalized
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_normalize_idempotent_any(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_idempotent_mixed_script(s in mixed_script_strategy()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn prop_normalize_shape(s in any::<String>()) {
        check_shape(&normalize(&s))?;
    }

    #[test]
    fn prop_normalize_shape_mixed_script(s in mixed_script_strategy()) {
        check_shape(&normalize(&s))?;
    }

    #[test]
    fn prop_tokens_non_empty(s in mixed_script_strategy()) {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(' '));
        }
    }

    #[test]
    fn prop_tokenize_through_normalize(s in mixed_script_strategy()) {
        prop_assert_eq!(tokenize(&s), tokenize(&normalize(&s)));
    }

    #[test]
    fn prop_no_arabic_variants_survive(s in mixed_script_strategy()) {
        let normalized = normalize(&s);
        for c in ['ك', 'ي', 'ة', '١', '۴'] {
            prop_assert!(!normalized.contains(c), "{:?} survived in {:?}", c, normalized);
        }
    }

    #[test]
    fn prop_marks_and_non_decimal_numbers_split(
        a in "[a-z]{1,5}",
        b in "[a-z]{1,5}",
        sep in prop::sample::select(vec!['\u{0650}', '\u{064B}', '\u{0301}', '²', 'Ⅳ', '½']),
    ) {
        let joined = format!("{}{}{}", a, sep, b);
        prop_assert_eq!(normalize(&joined), format!("{} {}", a, b));
    }
}
