//! NFA construction, closure and moves.

use levdict::{build_nfa, Input, Nfa, NfaState, StateSet};

use super::common::chars;

fn s(position: usize, errors: usize) -> NfaState {
    NfaState::new(position, errors)
}

fn set(states: &[NfaState]) -> StateSet {
    states.iter().copied().collect()
}

#[test]
fn test_closure_follows_epsilon_chains() {
    let mut nfa: Nfa<char> = Nfa::new(s(0, 0));
    nfa.add_transition(s(0, 0), Input::Epsilon, s(1, 1));
    nfa.add_transition(s(1, 1), Input::Epsilon, s(2, 2));
    nfa.add_transition(s(1, 1), Input::Symbol('x'), s(3, 1));

    let closure = nfa.epsilon_closure(&set(&[s(0, 0)]));
    assert_eq!(closure, set(&[s(0, 0), s(1, 1), s(2, 2)]));
}

#[test]
fn test_closure_of_empty_set_is_empty() {
    let nfa = build_nfa(&chars("abc"), 2);
    assert!(nfa.epsilon_closure(&StateSet::new()).is_empty());
}

#[test]
fn test_levenshtein_start_closure_skips_query_prefix() {
    // Epsilon edges skip one query symbol per error.
    let nfa = build_nfa(&chars("abc"), 2);
    let closure = nfa.epsilon_closure(nfa.start_states());
    assert_eq!(closure, set(&[s(0, 0), s(1, 1), s(2, 2)]));
}

#[test]
fn test_step_on_literal_includes_wildcard_targets() {
    let nfa = build_nfa(&chars("ab"), 1);
    let start = nfa.epsilon_closure(nfa.start_states());

    let on_a = nfa.step(&start, Input::Symbol('a'));
    // (0,0) -a-> (1,0); (0,0) -*-> (0,1),(1,1); (1,1) -b-> nothing for 'a'
    assert!(on_a.contains(&s(1, 0)));
    assert!(on_a.contains(&s(0, 1)));
    assert!(on_a.contains(&s(1, 1)));

    let on_any = nfa.step(&start, Input::Any);
    assert!(!on_any.contains(&s(1, 0)));
}

#[test]
fn test_step_from_empty_set_is_empty() {
    let nfa = build_nfa(&chars("ab"), 1);
    assert!(nfa.step(&StateSet::new(), Input::Symbol('a')).is_empty());
}

#[test]
fn test_finals_are_end_of_query_for_every_error_count() {
    let nfa = build_nfa(&chars("cat"), 1);
    assert!(nfa.is_final(&s(3, 0)));
    assert!(nfa.is_final(&s(3, 1)));
    assert!(!nfa.is_final(&s(2, 0)));
    assert!(nfa.contains_final(&set(&[s(0, 0), s(3, 1)])));
    assert!(!nfa.contains_final(&set(&[s(0, 0), s(2, 1)])));
}

#[test]
fn test_trailing_wildcard_only_below_bound() {
    let nfa = build_nfa(&chars("ab"), 1);
    assert_eq!(
        nfa.destinations(&s(2, 0), Input::Any),
        Some(&set(&[s(2, 1)]))
    );
    assert_eq!(nfa.destinations(&s(2, 1), Input::Any), None);
}
