//! Levenshtein automaton acceptance against known distances.

use levdict::{str_distance, Bytes, LevenshteinAutomaton};

use super::common::chars;

#[test]
fn test_classic_pairs() {
    let cases = [
        ("kitten", "sitting", 3),
        ("flaw", "lawn", 2),
        ("crocodile", "crocodiles", 1),
        ("duckling", "ducklings", 1),
        ("", "abc", 3),
    ];
    for (query, word, distance) in cases {
        assert_eq!(str_distance(query, word), distance);
        for k in 0..=4 {
            let automaton = LevenshteinAutomaton::new(query, k);
            assert_eq!(
                automaton.accepts(&chars(word)),
                distance <= k,
                "{query} vs {word} with k = {k}"
            );
        }
    }
}

#[test]
fn test_transposition_costs_two() {
    let automaton = LevenshteinAutomaton::new("ab", 1);
    assert!(!automaton.accepts(&chars("ba")));
    let automaton = LevenshteinAutomaton::new("ab", 2);
    assert!(automaton.accepts(&chars("ba")));
}

#[test]
fn test_multibyte_symbols_count_once() {
    let automaton = LevenshteinAutomaton::new("café", 1);
    assert!(automaton.accepts(&chars("cafe")));
    assert!(automaton.accepts(&chars("cafés")));
    assert!(!automaton.accepts(&chars("cofe")));
}

#[test]
fn test_byte_automaton() {
    let automaton = LevenshteinAutomaton::with_alphabet(&b"hedgehog"[..], 2, Bytes);
    assert!(automaton.accepts(b"hedgehogs"));
    assert!(automaton.accepts(b"hedghog"));
    assert!(!automaton.accepts(b"hog"));
}

#[test]
fn test_accessors() {
    let automaton = LevenshteinAutomaton::new("eagle", 2);
    assert_eq!(automaton.query(), chars("eagle").as_slice());
    assert_eq!(automaton.max_distance(), 2);
    assert!(automaton.dfa().state_count() > 1);
}
