// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query and document normalization.
//!
//! The index and the query path must agree byte-for-byte on what a token is,
//! so both go through [`normalize`] and [`tokenize`] and nothing else.
//!
//! # Algorithm
//!
//! 1. Trim surrounding whitespace
//! 2. A word char is a letter (general category L*) or a decimal digit (Nd).
//!    Everything else, known zero-width chars included, is a separator;
//!    separator runs collapse to one space, and only between words
//! 3. Arabic-Indic and Persian digits become ASCII digits
//! 4. Arabic letter variants fold to their Persian form
//! 5. Lowercase, one word at a time
//!
//! Combining marks are separators: `کِتاب` with a kasra splits in two, same as
//! a page that writes the kasra out. Superscripts and Roman numerals (No, Nl)
//! are separators too.
//!
//! ```
//! use searchit::normalize;
//!
//! assert_eq!(normalize("  Hello,   WORLD! "), "hello world");
//! assert_eq!(normalize("١٢٣"), "123");
//! ```

use super::tables::{ascii_digit, is_invisible, persian_form};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Letter or decimal digit.
#[inline]
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

/// Is this char a word separator?
#[inline]
fn is_separator(c: char) -> bool {
    !is_word_char(c) || is_invisible(c)
}

/// Script folding for a single non-separator char.
#[inline]
fn fold_script(c: char) -> char {
    ascii_digit(c).or_else(|| persian_form(c)).unwrap_or(c)
}

/// Lowercase `word` into `out`, space-separated from what came before.
///
/// Whole-word lowercasing keeps context rules such as Greek final sigma.
/// Expansions that leave the word-char set (`İ` gives `i` plus U+0307) lose
/// the extra char.
fn flush_word(word: &mut String, out: &mut String) {
    if word.is_empty() {
        return;
    }
    let lowered = word.to_lowercase();
    word.clear();

    let mut chars = lowered.chars().filter(|&c| is_word_char(c)).peekable();
    if chars.peek().is_none() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.extend(chars);
}

/// Normalize text into the canonical, space-separated token form.
///
/// Pure and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.trim().chars() {
        if is_separator(c) {
            flush_word(&mut word, &mut out);
        } else {
            word.push(fold_script(c));
        }
    }
    flush_word(&mut word, &mut out);

    out
}

/// Normalize, then split into tokens.
///
/// Blank input yields no tokens. Single-char tokens are kept; the correction
/// logic decides what to do with them.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
