//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They serve as ground
//! truth for verifying the optimized implementations.

use searchit::tokenize;
use std::collections::{BTreeMap, BTreeSet};

/// Set intersection of all lists, ascending. Empty input → empty output.
pub fn oracle_intersection(lists: &[Vec<u32>]) -> Vec<u32> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    let mut acc: BTreeSet<u32> = first.iter().copied().collect();
    for list in rest {
        let other: BTreeSet<u32> = list.iter().copied().collect();
        acc = acc.intersection(&other).copied().collect();
    }
    acc.into_iter().collect()
}

/// Token → set of document ordinals, by brute force.
pub fn oracle_inverted_index(texts: &[String]) -> BTreeMap<String, BTreeSet<u32>> {
    let mut index: BTreeMap<String, BTreeSet<u32>> = BTreeMap::new();
    for (doc, text) in texts.iter().enumerate() {
        for token in tokenize(text) {
            index.entry(token).or_default().insert(doc as u32);
        }
    }
    index
}

/// Lenient AND over one field: documents containing every query token that
/// the field's vocabulary knows about. Nothing if it knows none of them.
pub fn oracle_lenient_and(texts: &[String], query: &[String]) -> Vec<u32> {
    let index = oracle_inverted_index(texts);
    let known: Vec<&BTreeSet<u32>> = query.iter().filter_map(|t| index.get(t)).collect();
    if known.is_empty() {
        return Vec::new();
    }
    (0..texts.len() as u32)
        .filter(|doc| known.iter().all(|postings| postings.contains(doc)))
        .collect()
}

/// Classic Levenshtein edit distance via dynamic programming (full matrix).
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }
    table[a.len()][b.len()]
}

#[test]
fn oracle_sanity() {
    assert_eq!(oracle_intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
    assert_eq!(oracle_levenshtein("kitten", "sitting"), 3);
    let texts = vec!["a b".to_string(), "b c".to_string()];
    assert_eq!(oracle_lenient_and(&texts, &["b".to_string(), "zz".to_string()]), vec![0, 1]);
}
