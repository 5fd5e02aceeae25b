// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deterministic automaton over canonical NFA state sets.
//!
//! States live in a flat `Vec` indexed by [`StateId`]. Each state carries its
//! explicit transitions as a sorted `(symbol, target)` array, so the successor
//! search can find "the smallest enabled symbol at or above x" with one binary
//! search, plus an optional default transition taken for every symbol without
//! an explicit entry.
//!
//! # Successor search
//!
//! [`Dfa::successor`] answers "what is the smallest accepted string that is
//! `>=` this candidate?". The walk records `(prefix length, state, symbol
//! consumed)` frames while following the candidate. If the candidate is
//! accepted it is its own successor. Otherwise the frames are unwound: each
//! frame tries the smallest enabled symbol strictly above the one it consumed
//! before, and a successful bump descends greedily along the smallest enabled
//! symbols until an accepting state appears.
//!
//! ```text
//!  candidate:  b  a  d  x
//!  frames:    [0,s0,b] [1,s1,a] [2,s2,d] [3,s3,x]  (s3 has no 'x' edge)
//!  unwind:    try > 'x' at s3, then > 'd' at s2, ...
//!  descend:   from the bumped state, always take the smallest enabled symbol
//! ```
//!
//! The result is minimal whenever the accepted language is finite, which holds
//! for Levenshtein automata: every edge strictly increases either the query
//! position or the error count.

use std::collections::HashMap;

use crate::alphabet::{Alphabet, Symbol};
use crate::contracts;
use crate::state::StateSet;

/// Index of a DFA state.
pub type StateId = usize;

#[derive(Debug, Clone)]
struct DfaState<S> {
    members: StateSet,
    /// Explicit transitions, sorted by symbol.
    transitions: Vec<(S, StateId)>,
    default: Option<StateId>,
    accepting: bool,
}

#[derive(Debug, Clone)]
pub struct Dfa<S> {
    states: Vec<DfaState<S>>,
    index: HashMap<StateSet, StateId>,
    start: StateId,
}

/// One recorded point of the successor walk.
#[derive(Debug, Clone, Copy)]
struct Frame<S> {
    depth: usize,
    state: StateId,
    /// Symbol already consumed from this state, `None` if nothing was tried yet.
    tried: Option<S>,
}

impl<S: Symbol> Dfa<S> {
    /// Automaton with a single start state and no transitions.
    pub fn new(start: StateSet, accepting: bool) -> Self {
        let mut dfa = Self {
            states: Vec::new(),
            index: HashMap::new(),
            start: 0,
        };
        let (start, _) = dfa.intern(start, accepting);
        dfa.start = start;
        dfa
    }

    /// Look up the state standing for `members`, creating it if unseen.
    ///
    /// Returns the id and whether the state is new.
    pub fn intern(&mut self, members: StateSet, accepting: bool) -> (StateId, bool) {
        if let Some(&id) = self.index.get(&members) {
            return (id, false);
        }
        let id = self.states.len();
        self.index.insert(members.clone(), id);
        self.states.push(DfaState {
            members,
            transitions: Vec::new(),
            default: None,
            accepting,
        });
        (id, true)
    }

    /// Set the explicit transition `(src, symbol) -> dst`.
    pub fn add_transition(&mut self, src: StateId, symbol: S, dst: StateId) {
        let transitions = &mut self.states[src].transitions;
        match transitions.binary_search_by(|(existing, _)| existing.cmp(&symbol)) {
            Ok(pos) => {
                contracts::check_deterministic(transitions[pos].1, dst);
                transitions[pos].1 = dst;
            }
            Err(pos) => transitions.insert(pos, (symbol, dst)),
        }
    }

    /// Set the transition taken on every symbol without an explicit entry.
    pub fn set_default(&mut self, src: StateId, dst: StateId) {
        if let Some(existing) = self.states[src].default {
            contracts::check_deterministic(existing, dst);
        }
        self.states[src].default = Some(dst);
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Explicit transitions plus default transitions.
    pub fn transition_count(&self) -> usize {
        self.states
            .iter()
            .map(|state| state.transitions.len() + usize::from(state.default.is_some()))
            .sum()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.states[state].accepting
    }

    /// NFA states this DFA state stands for.
    pub fn members(&self, state: StateId) -> &StateSet {
        &self.states[state].members
    }

    /// Id of the state standing for `members`, if it was reached.
    pub fn find(&self, members: &StateSet) -> Option<StateId> {
        self.index.get(members).copied()
    }

    /// Explicit transitions of `state`, sorted by symbol.
    pub fn transitions(&self, state: StateId) -> &[(S, StateId)] {
        &self.states[state].transitions
    }

    pub fn default_transition(&self, state: StateId) -> Option<StateId> {
        self.states[state].default
    }

    /// Explicit lookup first, the default transition on a miss.
    pub fn next_state(&self, state: StateId, symbol: S) -> Option<StateId> {
        let current = &self.states[state];
        match current
            .transitions
            .binary_search_by(|(existing, _)| existing.cmp(&symbol))
        {
            Ok(pos) => Some(current.transitions[pos].1),
            Err(_) => current.default,
        }
    }

    /// State reached by consuming all of `input`, if any.
    pub fn walk(&self, input: &[S]) -> Option<StateId> {
        input
            .iter()
            .try_fold(self.start, |state, &symbol| self.next_state(state, symbol))
    }

    pub fn accepts(&self, input: &[S]) -> bool {
        self.walk(input).is_some_and(|state| self.is_accepting(state))
    }

    /// Smallest accepted string `>= candidate`, or `None` if there is none.
    pub fn successor<A>(&self, alphabet: &A, candidate: &[S]) -> Option<Vec<S>>
    where
        A: Alphabet<Symbol = S>,
    {
        let mut frames: Vec<Frame<S>> = Vec::with_capacity(candidate.len() + 1);
        let mut state = self.start;
        let mut exhausted = true;

        for (depth, &symbol) in candidate.iter().enumerate() {
            frames.push(Frame {
                depth,
                state,
                tried: Some(symbol),
            });
            match self.next_state(state, symbol) {
                Some(next) => state = next,
                None => {
                    exhausted = false;
                    break;
                }
            }
        }

        if exhausted {
            if self.is_accepting(state) {
                return Some(candidate.to_vec());
            }
            // An empty extension is already ruled out; try the smallest one-symbol
            // extension from the end of the candidate before backtracking.
            frames.push(Frame {
                depth: candidate.len(),
                state,
                tried: None,
            });
        }

        let mut path: Vec<S> = candidate.to_vec();
        while let Some(frame) = frames.pop() {
            let Some(symbol) = self.next_edge(alphabet, frame.state, frame.tried) else {
                continue;
            };
            let Some(next) = self.next_state(frame.state, symbol) else {
                contracts::check_edge_has_target(frame.state, &symbol);
                return None;
            };

            path.truncate(frame.depth);
            path.push(symbol);
            if self.is_accepting(next) {
                contracts::check_successor(self, candidate, &path);
                return Some(path);
            }

            // Keep the bumped frame so a dead end below falls back to the
            // next sibling symbol.
            frames.push(Frame {
                tried: Some(symbol),
                ..frame
            });
            frames.push(Frame {
                depth: frame.depth + 1,
                state: next,
                tried: None,
            });
        }

        None
    }

    /// Smallest symbol enabled at `state` that is greater than `tried`
    /// (any symbol at all when `tried` is `None`).
    ///
    /// Explicit edges are offered even when their symbol lies outside the
    /// alphabet. The default edge only offers alphabet symbols.
    fn next_edge<A>(&self, alphabet: &A, state: StateId, tried: Option<S>) -> Option<S>
    where
        A: Alphabet<Symbol = S>,
    {
        let current = &self.states[state];
        let pos = match tried {
            None => 0,
            Some(symbol) => current.transitions.partition_point(|(s, _)| *s <= symbol),
        };
        let explicit = current.transitions.get(pos).map(|(s, _)| *s);
        let fallback = current.default.and_then(|_| match tried {
            None => Some(alphabet.first()),
            Some(symbol) => alphabet.after(symbol),
        });

        match (explicit, fallback) {
            (Some(explicit), Some(fallback)) => Some(explicit.min(fallback)),
            (explicit, fallback) => explicit.or(fallback),
        }
    }
}
