// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein automata for a fixed query and distance bound.
//!
//! State `(i, e)` means "the first `i` query symbols are accounted for, at a
//! cost of `e` edits". For a query of length `n` and bound `k`:
//!
//! | Move         | Edge                                   | Condition      |
//! |--------------|----------------------------------------|----------------|
//! | match        | `(i,e) --w[i]--> (i+1,e)`              | `i < n`        |
//! | substitution | `(i,e) --*--> (i+1,e+1)`               | `i < n, e < k` |
//! | extra symbol | `(i,e) --*--> (i,e+1)`                 | `i < n, e < k` |
//! | skipped query symbol | `(i,e) --ε--> (i+1,e+1)`       | `i < n, e < k` |
//! | trailing symbol | `(n,e) --*--> (n,e+1)`              | `e < k`        |
//!
//! Final states are `(n, e)` for every `e <= k`. A string is accepted iff
//! some path consumes it with at most `k` edits, which is exactly the
//! Wagner-Fischer recurrence unrolled into reachability. The wildcard also
//! covers `w[i]` itself on the substitution edge; the match edge already
//! gives the cheaper path and the subset construction merges both.
//!
//! With `k = 0` no wildcard or epsilon edge exists and the automaton accepts
//! the query alone.

use tracing::debug;

use crate::alphabet::{Alphabet, CharRange, Input, Symbol};
use crate::dfa::Dfa;
use crate::dictionary::OrderedLookup;
use crate::intersect::Intersection;
use crate::nfa::Nfa;
use crate::state::NfaState;

/// Build the Levenshtein NFA for `query` within `max_distance` edits.
pub fn build_nfa<S: Symbol>(query: &[S], max_distance: usize) -> Nfa<S> {
    let n = query.len();
    let k = max_distance;
    let mut nfa = Nfa::new(NfaState::new(0, 0));

    for (i, &symbol) in query.iter().enumerate() {
        for e in 0..=k {
            let here = NfaState::new(i, e);
            nfa.add_transition(here, Input::Symbol(symbol), NfaState::new(i + 1, e));

            if e < k {
                nfa.add_transition(here, Input::Any, NfaState::new(i + 1, e + 1));
                nfa.add_transition(here, Input::Any, NfaState::new(i, e + 1));
                nfa.add_transition(here, Input::Epsilon, NfaState::new(i + 1, e + 1));
            }
        }
    }

    for e in 0..=k {
        if e < k {
            nfa.add_transition(NfaState::new(n, e), Input::Any, NfaState::new(n, e + 1));
        }
        nfa.add_final(NfaState::new(n, e));
    }

    nfa
}

/// A query word compiled into an NFA and its DFA.
///
/// Immutable once built and scoped to one `(word, k)` request. Instances
/// share nothing, so independent queries can run on separate threads against
/// the same read-only dictionary.
#[derive(Debug, Clone)]
pub struct LevenshteinAutomaton<A: Alphabet> {
    query: Vec<A::Symbol>,
    max_distance: usize,
    alphabet: A,
    nfa: Nfa<A::Symbol>,
    dfa: Dfa<A::Symbol>,
}

impl LevenshteinAutomaton<CharRange> {
    /// Automaton over every Unicode scalar value.
    pub fn new(query: &str, max_distance: usize) -> Self {
        let query: Vec<char> = query.chars().collect();
        Self::with_alphabet(&query, max_distance, CharRange::UNICODE)
    }
}

impl<A: Alphabet> LevenshteinAutomaton<A> {
    pub fn with_alphabet(query: &[A::Symbol], max_distance: usize, alphabet: A) -> Self {
        let nfa = build_nfa(query, max_distance);
        let dfa = nfa.to_dfa();
        debug!(
            query_len = query.len(),
            max_distance,
            dfa_states = dfa.state_count(),
            "built levenshtein automaton"
        );
        Self {
            query: query.to_vec(),
            max_distance,
            alphabet,
            nfa,
            dfa,
        }
    }

    pub fn query(&self) -> &[A::Symbol] {
        &self.query
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn alphabet(&self) -> &A {
        &self.alphabet
    }

    pub fn nfa(&self) -> &Nfa<A::Symbol> {
        &self.nfa
    }

    pub fn dfa(&self) -> &Dfa<A::Symbol> {
        &self.dfa
    }

    /// Is `candidate` within the distance bound of the query?
    pub fn accepts(&self, candidate: &[A::Symbol]) -> bool {
        self.dfa.accepts(candidate)
    }

    /// Smallest accepted string `>= candidate`.
    pub fn successor(&self, candidate: &[A::Symbol]) -> Option<Vec<A::Symbol>> {
        self.dfa.successor(&self.alphabet, candidate)
    }

    /// Lazily walk the matches in `dictionary`, ascending.
    pub fn matches<'a, D>(&'a self, dictionary: &'a D) -> Intersection<'a, A, D>
    where
        D: OrderedLookup<A::Symbol> + ?Sized,
    {
        Intersection::new(&self.dfa, &self.alphabet, dictionary)
    }

    /// Every dictionary entry within the bound, ascending, each once.
    pub fn all_matches<D>(&self, dictionary: &D) -> Vec<Vec<A::Symbol>>
    where
        D: OrderedLookup<A::Symbol> + ?Sized,
    {
        self.matches(dictionary).map(<[A::Symbol]>::to_vec).collect()
    }
}
