// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Nondeterministic automaton over `(position, errors)` states.
//!
//! Edges carry an [`Input`] label: a literal, the wildcard, or epsilon.
//! [`Nfa::to_dfa`] runs the subset construction. The wildcard is never
//! expanded per character there: a wildcard edge out of a state set becomes
//! that DFA state's single default transition, so the DFA's size is bounded
//! by the number of reachable subsets, not by alphabet size times subsets.
//!
//! The dependency is one-way. The DFA is built from the NFA but holds
//! nothing of it except the canonical [`StateSet`] each DFA state stands for.

use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

use tracing::debug;

use crate::alphabet::{Input, Symbol};
use crate::contracts;
use crate::dfa::Dfa;
use crate::state::{NfaState, StateSet};

/// Transition table of a single source state, keyed by label.
type Edges<S> = BTreeMap<Input<S>, StateSet>;

#[derive(Debug, Clone)]
pub struct Nfa<S> {
    starts: StateSet,
    transitions: HashMap<NfaState, Edges<S>>,
    finals: BTreeSet<NfaState>,
}

impl<S: Symbol> Nfa<S> {
    /// Empty automaton starting in `start`.
    pub fn new(start: NfaState) -> Self {
        Self::with_starts([start])
    }

    pub fn with_starts<I: IntoIterator<Item = NfaState>>(starts: I) -> Self {
        Self {
            starts: starts.into_iter().collect(),
            transitions: HashMap::new(),
            finals: BTreeSet::new(),
        }
    }

    /// Add `dst` to the destinations of `(src, input)`.
    ///
    /// Neither state needs to exist beforehand. Duplicate edges are absorbed.
    pub fn add_transition(&mut self, src: NfaState, input: Input<S>, dst: NfaState) {
        self.transitions
            .entry(src)
            .or_default()
            .entry(input)
            .or_default()
            .insert(dst);
    }

    pub fn add_final(&mut self, state: NfaState) {
        self.finals.insert(state);
    }

    pub fn is_final(&self, state: &NfaState) -> bool {
        self.finals.contains(state)
    }

    /// True iff `states` intersects the final states.
    pub fn contains_final(&self, states: &StateSet) -> bool {
        states.iter().any(|state| self.finals.contains(state))
    }

    pub fn start_states(&self) -> &StateSet {
        &self.starts
    }

    pub fn final_states(&self) -> impl Iterator<Item = &NfaState> {
        self.finals.iter()
    }

    /// Destinations of `(state, input)`, without closure.
    pub fn destinations(&self, state: &NfaState, input: Input<S>) -> Option<&StateSet> {
        self.transitions.get(state)?.get(&input)
    }

    /// Smallest superset of `states` closed under epsilon moves.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = states.clone();
        let mut queue: VecDeque<NfaState> = states.iter().copied().collect();

        while let Some(current) = queue.pop_front() {
            let Some(targets) = self.destinations(&current, Input::Epsilon) else {
                continue;
            };
            for &target in targets {
                if closure.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        contracts::check_epsilon_closed(self, &closure);
        closure
    }

    /// States reachable from `states` in one move on `input`.
    ///
    /// A literal input also follows wildcard edges. The result is not
    /// epsilon-closed; callers close it when they need a DFA state.
    pub fn step(&self, states: &StateSet, input: Input<S>) -> StateSet {
        let mut reached = StateSet::new();
        for state in states {
            let Some(edges) = self.transitions.get(state) else {
                continue;
            };
            if let Some(targets) = edges.get(&input) {
                reached.extend(targets.iter().copied());
            }
            if matches!(input, Input::Symbol(_)) {
                if let Some(targets) = edges.get(&Input::Any) {
                    reached.extend(targets.iter().copied());
                }
            }
        }
        reached
    }

    /// Every non-epsilon label leaving a member of `states`, ascending.
    pub fn inputs(&self, states: &StateSet) -> BTreeSet<Input<S>> {
        states
            .iter()
            .filter_map(|state| self.transitions.get(state))
            .flat_map(|edges| edges.keys().copied())
            .filter(|input| *input != Input::Epsilon)
            .collect()
    }

    /// Every state mentioned by the automaton, ascending.
    pub fn states(&self) -> BTreeSet<NfaState> {
        let mut states: BTreeSet<NfaState> = self.starts.iter().copied().collect();
        states.extend(self.finals.iter().copied());
        for (src, edges) in &self.transitions {
            states.insert(*src);
            for targets in edges.values() {
                states.extend(targets.iter().copied());
            }
        }
        states
    }

    /// Every edge as `(src, label, dst)`, sorted by source then label.
    pub fn edges(&self) -> Vec<(NfaState, Input<S>, NfaState)> {
        let mut edges: Vec<_> = self
            .transitions
            .iter()
            .flat_map(|(src, labelled)| {
                labelled.iter().flat_map(move |(input, targets)| {
                    targets.iter().map(move |dst| (*src, *input, *dst))
                })
            })
            .collect();
        edges.sort();
        edges
    }

    /// Subset construction.
    ///
    /// Each DFA state is the epsilon-closed image of its parent under one
    /// label, interned by structural equality, so the result is deterministic
    /// by construction.
    pub fn to_dfa(&self) -> Dfa<S> {
        let start = self.epsilon_closure(&self.starts);
        let accepting = self.contains_final(&start);
        let mut dfa = Dfa::new(start, accepting);
        let mut pending = VecDeque::from([dfa.start()]);

        while let Some(current) = pending.pop_front() {
            let members = dfa.members(current).clone();

            for input in self.inputs(&members) {
                let target = self.epsilon_closure(&self.step(&members, input));
                let accepting = self.contains_final(&target);
                let (target_id, fresh) = dfa.intern(target, accepting);
                if fresh {
                    pending.push_back(target_id);
                }

                match input {
                    Input::Any => dfa.set_default(current, target_id),
                    Input::Symbol(symbol) => dfa.add_transition(current, symbol, target_id),
                    Input::Epsilon => {}
                }
            }
        }

        debug!(
            nfa_states = self.states().len(),
            dfa_states = dfa.state_count(),
            dfa_transitions = dfa.transition_count(),
            "subset construction finished"
        );
        dfa
    }
}
