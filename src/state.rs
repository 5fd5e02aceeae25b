// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! NFA states and canonical sets of them.
//!
//! A DFA state *is* a set of NFA states, so set identity has to be
//! structural: two sets with the same members must compare and hash equal no
//! matter how they were built. [`StateSet`] keeps its members sorted and
//! deduplicated, which makes the derived `Eq`/`Hash`/`Ord` canonical.

use std::fmt;

/// A position in the query paired with the number of edits spent reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NfaState {
    pub position: usize,
    pub errors: usize,
}

impl NfaState {
    pub const fn new(position: usize, errors: usize) -> Self {
        Self { position, errors }
    }
}

impl fmt::Display for NfaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.position, self.errors)
    }
}

/// Sorted, duplicate-free set of NFA states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet {
    states: Vec<NfaState>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `state`, returning `true` if it was not already present.
    pub fn insert(&mut self, state: NfaState) -> bool {
        match self.states.binary_search(&state) {
            Ok(_) => false,
            Err(pos) => {
                self.states.insert(pos, state);
                true
            }
        }
    }

    pub fn contains(&self, state: &NfaState) -> bool {
        self.states.binary_search(state).is_ok()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Members in canonical (ascending) order.
    pub fn iter(&self) -> std::slice::Iter<'_, NfaState> {
        self.states.iter()
    }

    pub fn as_slice(&self) -> &[NfaState] {
        &self.states
    }

    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.states.iter().all(|state| other.contains(state))
    }
}

impl FromIterator<NfaState> for StateSet {
    fn from_iter<I: IntoIterator<Item = NfaState>>(iter: I) -> Self {
        let mut states: Vec<NfaState> = iter.into_iter().collect();
        states.sort_unstable();
        states.dedup();
        Self { states }
    }
}

impl Extend<NfaState> for StateSet {
    fn extend<I: IntoIterator<Item = NfaState>>(&mut self, iter: I) {
        self.states.extend(iter);
        self.states.sort_unstable();
        self.states.dedup();
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a NfaState;
    type IntoIter = std::slice::Iter<'a, NfaState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for state in &self.states {
            write!(f, "{}", state)?;
        }
        f.write_str("]")
    }
}
