//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the brute-force oracles the automata are checked against.

#![doc(hidden)]

use crate::alphabet::Symbol;
use crate::distance::levenshtein_within;

/// Every string over `symbols` of length `0..=max_len`, in generation order.
///
/// Grows as `|symbols|^max_len`; keep both small.
pub fn all_strings<S: Symbol>(symbols: &[S], max_len: usize) -> Vec<Vec<S>> {
    let mut out = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * symbols.len());
        for prefix in &frontier {
            for &symbol in symbols {
                let mut word: Vec<S> = prefix.clone();
                word.push(symbol);
                next.push(word);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

/// Entries of `dictionary` within `max_distance` of `query`, by linear scan.
///
/// Sorted and deduplicated, so it compares directly against the intersection.
pub fn brute_force_matches<S: Symbol>(
    query: &[S],
    max_distance: usize,
    dictionary: &[Vec<S>],
) -> Vec<Vec<S>> {
    let mut found: Vec<Vec<S>> = dictionary
        .iter()
        .filter(|word| levenshtein_within(query, word, max_distance))
        .cloned()
        .collect();
    found.sort();
    found.dedup();
    found
}

/// Smallest string in `language` that is `>= candidate`.
pub fn brute_force_successor<S: Symbol>(language: &[Vec<S>], candidate: &[S]) -> Option<Vec<S>> {
    language
        .iter()
        .filter(|word| word.as_slice() >= candidate)
        .min()
        .cloned()
}

/// Convert a string to its symbol vector.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}
