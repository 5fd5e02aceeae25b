//! Successor search: monotone, accepted, and minimal.

use levdict::{CharRange, LevenshteinAutomaton};
use proptest::prelude::*;

use super::common::{all_strings, brute_force_successor};

const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

fn abc() -> CharRange {
    CharRange::new('a', 'c').unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    /// Property: successor(s) is the smallest accepted t >= s over the alphabet.
    #[test]
    fn prop_successor_is_minimal(
        word in "[abc]{0,4}",
        candidate in "[abc]{0,6}",
        k in 0usize..3,
    ) {
        let query: Vec<char> = word.chars().collect();
        let automaton = LevenshteinAutomaton::with_alphabet(&query, k, abc());
        let language: Vec<Vec<char>> = all_strings(&SYMBOLS, query.len() + k)
            .into_iter()
            .filter(|s| automaton.accepts(s))
            .collect();

        let candidate: Vec<char> = candidate.chars().collect();
        let found = automaton.successor(&candidate);
        prop_assert_eq!(&found, &brute_force_successor(&language, &candidate));

        if let Some(t) = found {
            prop_assert!(t >= candidate);
            prop_assert!(automaton.accepts(&t));
        }
    }

    /// Property: successors never move backwards as the candidate grows.
    #[test]
    fn prop_successor_monotone(
        word in "[abc]{1,4}",
        mut pair in prop::collection::vec("[abc]{0,5}", 2),
        k in 0usize..3,
    ) {
        pair.sort();
        let query: Vec<char> = word.chars().collect();
        let automaton = LevenshteinAutomaton::with_alphabet(&query, k, abc());
        let low: Vec<char> = pair[0].chars().collect();
        let high: Vec<char> = pair[1].chars().collect();
        match (automaton.successor(&low), automaton.successor(&high)) {
            (Some(a), Some(b)) => prop_assert!(a <= b),
            (None, Some(_)) => prop_assert!(false, "successor vanished then reappeared"),
            _ => {}
        }
    }

    /// Property: over the full Unicode alphabet an accepted candidate is its
    /// own successor.
    #[test]
    fn prop_accepted_is_fixed_point(word in "[a-z]{0,6}", k in 0usize..3) {
        let automaton = LevenshteinAutomaton::new(&word, k);
        let query: Vec<char> = word.chars().collect();
        prop_assert_eq!(automaton.successor(&query), Some(query));
    }
}

#[test]
fn empty_query_successor_of_empty_is_empty() {
    let automaton = LevenshteinAutomaton::new("", 1);
    assert_eq!(automaton.successor(&[]), Some(Vec::new()));
}

#[test]
fn successor_of_unaccepted_end_extends_before_backtracking() {
    // "ca" is not within 0 of "cat", but its one-symbol extension is.
    let automaton = LevenshteinAutomaton::new("cat", 0);
    let candidate: Vec<char> = "ca".chars().collect();
    let expected: Vec<char> = "cat".chars().collect();
    assert_eq!(automaton.successor(&candidate), Some(expected));
}
