//! Acceptance, determinism and closure properties.

use levdict::{build_nfa, edit_distance, Input, LevenshteinAutomaton, StateSet};
use proptest::prelude::*;

use super::common::all_strings;
use super::oracles::small_word;

const SYMBOLS: [char; 3] = ['a', 'b', 'c'];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: the DFA accepts s iff edit_distance(s, w) <= k, checked
    /// exhaustively over every string a little longer than w.
    #[test]
    fn prop_accepts_exactly_the_ball(word in small_word(), k in 0usize..3) {
        let query: Vec<char> = word.chars().collect();
        let automaton = LevenshteinAutomaton::new(&word, k);
        for candidate in all_strings(&SYMBOLS, query.len() + k + 1) {
            prop_assert_eq!(
                automaton.accepts(&candidate),
                edit_distance(&query, &candidate) <= k,
                "query {:?} candidate {:?} k {}", word, candidate, k
            );
        }
    }

    /// Property: symbols outside the query's alphabet cost exactly one edit.
    #[test]
    fn prop_foreign_symbol_is_one_edit(word in "[abc]{1,5}", k in 1usize..3) {
        let automaton = LevenshteinAutomaton::new(&word, k);
        let mut with_foreign: Vec<char> = word.chars().collect();
        with_foreign[0] = 'z';
        prop_assert!(automaton.accepts(&with_foreign));
        with_foreign.insert(0, 'z');
        prop_assert_eq!(automaton.accepts(&with_foreign), k >= 2);
    }

    /// Property: closure is idempotent on every reachable DFA state and on
    /// arbitrary subsets of NFA states.
    #[test]
    fn prop_closure_idempotent(
        word in small_word(),
        k in 0usize..3,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let query: Vec<char> = word.chars().collect();
        let nfa = build_nfa(&query, k);
        let states: Vec<_> = nfa.states().into_iter().collect();
        let subset: StateSet = picks.iter().map(|i| states[i.index(states.len())]).collect();

        let once = nfa.epsilon_closure(&subset);
        prop_assert_eq!(nfa.epsilon_closure(&once), once.clone());
        prop_assert!(subset.is_subset(&once));

        let dfa = nfa.to_dfa();
        for id in 0..dfa.state_count() {
            let members = dfa.members(id);
            prop_assert_eq!(&nfa.epsilon_closure(members), members);
        }
    }

    /// Property: each DFA state has at most one destination per symbol, and
    /// that destination is the closed NFA move.
    #[test]
    fn prop_dfa_transitions_are_closed_moves(word in small_word(), k in 0usize..3) {
        let query: Vec<char> = word.chars().collect();
        let nfa = build_nfa(&query, k);
        let dfa = nfa.to_dfa();
        for id in 0..dfa.state_count() {
            let members = dfa.members(id);
            for symbol in SYMBOLS.iter().copied().chain(['z']) {
                let expected = nfa.epsilon_closure(&nfa.step(members, Input::Symbol(symbol)));
                match dfa.next_state(id, symbol) {
                    Some(next) => prop_assert_eq!(dfa.members(next), &expected),
                    None => prop_assert!(expected.is_empty()),
                }
            }
        }
    }
}
