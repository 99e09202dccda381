// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed lookup tables for script normalization.
//!
//! Both tables are sorted by their key so lookups are a binary search. Keep
//! them sorted when adding entries; `tables_are_sorted` guards it.

/// Code points that render with no width in common fonts.
///
/// Not exhaustive. Every entry is already outside the letter and digit
/// categories, so the table only matters if the word-char test is widened.
pub(crate) const INVISIBLE_CHARS: [char; 28] = [
    '\u{061C}', // arabic letter mark
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{200E}', // left-to-right mark
    '\u{200F}', // right-to-left mark
    '\u{202A}',
    '\u{202B}',
    '\u{202C}',
    '\u{202D}',
    '\u{202E}',
    '\u{2060}', // word joiner
    '\u{2061}',
    '\u{2062}',
    '\u{2063}',
    '\u{2064}',
    '\u{2065}',
    '\u{2066}',
    '\u{2067}',
    '\u{2068}',
    '\u{2069}',
    '\u{206A}',
    '\u{206B}',
    '\u{206C}',
    '\u{206D}',
    '\u{206E}',
    '\u{206F}',
    '\u{FEFF}', // byte order mark
];

/// Arabic-script letters folded to their Persian form.
///
/// Covers the Arabic yeh/kaf/teh marbuta, hamza carriers, and the Urdu and
/// Kurdish heh/yeh variants that crawled Persian pages mix freely.
pub(crate) const ARABIC_TO_PERSIAN: [(char, char); 19] = [
    ('\u{0621}', 'ا'), // ء
    ('\u{0622}', 'ا'), // آ
    ('\u{0623}', 'ا'), // أ
    ('\u{0624}', 'و'), // ؤ
    ('\u{0625}', 'ا'), // إ
    ('\u{0626}', 'ی'), // ئ
    ('\u{0629}', 'ه'), // ة
    ('\u{0643}', 'ک'), // ك
    ('\u{064A}', 'ی'), // ي
    ('\u{06C0}', 'ه'), // ۀ
    ('\u{06C1}', 'ه'), // ہ
    ('\u{06C2}', 'ه'), // ۂ
    ('\u{06C3}', 'ه'), // ۃ
    ('\u{06CD}', 'ی'), // ۍ
    ('\u{06CE}', 'ی'), // ێ
    ('\u{06D0}', 'ی'), // ې
    ('\u{06D2}', 'ی'), // ے
    ('\u{06D3}', 'ی'), // ۓ
    ('\u{06D5}', 'ه'), // ە
];

/// Arabic-Indic digits ٠..٩
pub(crate) const ARABIC_INDIC_DIGITS: std::ops::RangeInclusive<u32> = 0x0660..=0x0669;

/// Extended Arabic-Indic (Persian) digits ۰..۹
pub(crate) const PERSIAN_DIGITS: std::ops::RangeInclusive<u32> = 0x06F0..=0x06F9;

#[inline]
pub(crate) fn is_invisible(c: char) -> bool {
    INVISIBLE_CHARS.binary_search(&c).is_ok()
}

#[inline]
pub(crate) fn persian_form(c: char) -> Option<char> {
    ARABIC_TO_PERSIAN
        .binary_search_by_key(&c, |&(arabic, _)| arabic)
        .ok()
        .map(|i| ARABIC_TO_PERSIAN[i].1)
}

/// Map Arabic-Indic and Persian digits onto ASCII by fixed offset.
#[inline]
pub(crate) fn ascii_digit(c: char) -> Option<char> {
    let code = c as u32;
    let base = if ARABIC_INDIC_DIGITS.contains(&code) {
        *ARABIC_INDIC_DIGITS.start()
    } else if PERSIAN_DIGITS.contains(&code) {
        *PERSIAN_DIGITS.start()
    } else {
        return None;
    };
    char::from_u32(code - base + u32::from(b'0'))
}
