//! DFA construction, walking and successor search.

use levdict::{build_nfa, CharRange, Dfa, LevenshteinAutomaton, NfaState, StateSet};

use super::common::{chars, to_string};

fn tag(n: usize) -> StateSet {
    [NfaState::new(n, 0)].into_iter().collect()
}

/// Accepts "ab" and "b"; "aa" walks into a non-accepting dead end.
fn with_dead_end() -> Dfa<char> {
    let mut dfa = Dfa::new(tag(0), false);
    let (after_a, _) = dfa.intern(tag(1), false);
    let (ab, _) = dfa.intern(tag(2), true);
    let (b, _) = dfa.intern(tag(3), true);
    let (dead, _) = dfa.intern(tag(4), false);
    dfa.add_transition(0, 'a', after_a);
    dfa.add_transition(0, 'b', b);
    dfa.add_transition(after_a, 'a', dead);
    dfa.add_transition(after_a, 'b', ab);
    dfa
}

fn successor(dfa: &Dfa<char>, candidate: &str) -> Option<String> {
    dfa.successor(&CharRange::UNICODE, &chars(candidate))
        .map(|found| to_string(&found))
}

#[test]
fn test_walk_and_accept() {
    let dfa = with_dead_end();
    assert!(dfa.accepts(&chars("ab")));
    assert!(dfa.accepts(&chars("b")));
    assert!(!dfa.accepts(&chars("aa")));
    assert!(!dfa.accepts(&chars("abc")));
    assert_eq!(dfa.walk(&chars("aa")), Some(4));
    assert_eq!(dfa.walk(&chars("c")), None);
}

#[test]
fn test_successor_backs_out_of_dead_end() {
    let dfa = with_dead_end();
    assert_eq!(successor(&dfa, "a").as_deref(), Some("ab"));
    assert_eq!(successor(&dfa, "aa").as_deref(), Some("ab"));
    assert_eq!(successor(&dfa, "aaz").as_deref(), Some("ab"));
}

#[test]
fn test_successor_none_past_the_language() {
    let dfa = with_dead_end();
    assert_eq!(successor(&dfa, "b").as_deref(), Some("b"));
    assert_eq!(successor(&dfa, "b\0"), None);
    assert_eq!(successor(&dfa, "c"), None);
}

#[test]
fn test_interning_is_structural() {
    let mut dfa: Dfa<char> = Dfa::new(tag(0), false);
    let (first, fresh) = dfa.intern(tag(7), true);
    assert!(fresh);
    let (again, fresh) = dfa.intern(tag(7), true);
    assert!(!fresh);
    assert_eq!(first, again);
    assert_eq!(dfa.find(&tag(7)), Some(first));
    assert_eq!(dfa.state_count(), 2);
}

#[test]
fn test_subset_construction_is_deterministic() {
    let nfa = build_nfa(&chars("duckling"), 2);
    let dfa = nfa.to_dfa();
    for state in 0..dfa.state_count() {
        let symbols: Vec<char> = dfa.transitions(state).iter().map(|(s, _)| *s).collect();
        let mut sorted = symbols.clone();
        sorted.dedup();
        assert_eq!(symbols, sorted, "duplicate symbol out of state {}", state);
        assert!(symbols.windows(2).all(|w| w[0] < w[1]));
    }
    // Rebuilding yields the same automaton.
    let again = nfa.to_dfa();
    assert_eq!(again.state_count(), dfa.state_count());
    assert_eq!(again.transition_count(), dfa.transition_count());
}

#[test]
fn test_default_transition_covers_unlisted_symbols() {
    let automaton = LevenshteinAutomaton::new("ab", 1);
    let dfa = automaton.dfa();
    let start = dfa.start();
    assert!(dfa.default_transition(start).is_some());
    assert_eq!(dfa.next_state(start, 'q'), dfa.default_transition(start));
    assert_ne!(dfa.next_state(start, 'a'), dfa.default_transition(start));
}

#[test]
fn test_restricted_alphabet_successor() {
    let automaton =
        LevenshteinAutomaton::with_alphabet(&chars("cat"), 1, CharRange::LOWERCASE_ASCII);
    // "aat" (c -> a) sorts before both "acat" and "at".
    let first = automaton.successor(&[]).map(|s| to_string(&s));
    assert_eq!(first.as_deref(), Some("aat"));
}
