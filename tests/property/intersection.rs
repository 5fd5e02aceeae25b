//! Intersection completeness against a linear scan.

use levdict::{match_batch, CharRange, Dictionary, LevenshteinAutomaton};
use proptest::prelude::*;

use super::common::brute_force_matches;

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{0,7}", 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the intersection is exactly {d in D : distance(d, w) <= k},
    /// ascending, each once.
    #[test]
    fn prop_intersection_complete(
        word in "[a-e]{0,6}",
        words in dictionary_strategy(),
        k in 0usize..4,
    ) {
        let dictionary = Dictionary::from_words(&words);
        let query: Vec<char> = word.chars().collect();
        let automaton = LevenshteinAutomaton::new(&word, k);

        let found = automaton.all_matches(&dictionary);
        let expected = brute_force_matches(&query, k, dictionary.words());
        prop_assert_eq!(found, expected);
    }

    /// Property: a restricted alphabet finds the same matches when the
    /// dictionary stays inside it.
    #[test]
    fn prop_restricted_alphabet_same_matches(
        word in "[a-e]{0,6}",
        words in dictionary_strategy(),
        k in 0usize..3,
    ) {
        let dictionary = Dictionary::from_words(&words);
        let query: Vec<char> = word.chars().collect();
        let restricted = LevenshteinAutomaton::with_alphabet(&query, k, CharRange::LOWERCASE_ASCII);
        let unicode = LevenshteinAutomaton::new(&word, k);
        prop_assert_eq!(restricted.all_matches(&dictionary), unicode.all_matches(&dictionary));
    }

    /// Property: batch results equal one-at-a-time results, in order.
    #[test]
    fn prop_batch_matches_sequential(
        queries in prop::collection::vec(("[a-e]{0,5}", 0usize..3), 0..6),
        words in dictionary_strategy(),
    ) {
        let dictionary = Dictionary::from_words(&words);
        let batch = match_batch(&queries, &dictionary);
        prop_assert_eq!(batch.len(), queries.len());
        for ((word, k), found) in queries.iter().zip(&batch) {
            prop_assert_eq!(found, &levdict::find_matches(word, *k, &dictionary));
        }
    }
}
