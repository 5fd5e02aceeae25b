// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the automaton invariants.
//!
//! Debug-mode assertions that the construction and search code call at the
//! points where an invariant is established. They:
//!
//! 1. Are **zero-cost in release builds** (`debug_assert!` or a
//!    `cfg!(debug_assertions)` guard around any loop)
//! 2. Fail at the first broken invariant instead of at a wrong match list
//!    three layers later
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                        |
//! |----------------------------|--------------------------------------------------|
//! | `check_epsilon_closed`     | closure contains every epsilon target of a member|
//! | `check_deterministic`      | one destination per (state, symbol) and default  |
//! | `check_edge_has_target`    | an offered edge always has a destination         |
//! | `check_successor`          | successor is accepted and `>=` its candidate     |
//! | `check_sorted_around`      | dictionary entries ascend around a seek position |

use crate::alphabet::{Input, Symbol};
use crate::dfa::{Dfa, StateId};
use crate::nfa::Nfa;
use crate::state::StateSet;

// ============================================================================
// NFA CONTRACTS
// ============================================================================

/// Check that `closure` is closed under epsilon moves.
///
/// # Panics (debug builds only)
/// Panics if some member has an epsilon target outside the set.
#[inline]
pub fn check_epsilon_closed<S: Symbol>(nfa: &Nfa<S>, closure: &StateSet) {
    if !cfg!(debug_assertions) {
        return;
    }
    for state in closure {
        let Some(targets) = nfa.destinations(state, Input::Epsilon) else {
            continue;
        };
        debug_assert!(
            targets.is_subset(closure),
            "Contract violation: epsilon closure {} misses targets {} of {}",
            closure,
            targets,
            state
        );
    }
}

// ============================================================================
// DFA CONTRACTS
// ============================================================================

/// Check that re-adding a transition does not change its destination.
///
/// # Panics (debug builds only)
/// Panics if `existing != replacement`.
#[inline]
pub fn check_deterministic(existing: StateId, replacement: StateId) {
    debug_assert_eq!(
        existing, replacement,
        "Contract violation: transition already leads to state {}, not {}",
        existing, replacement
    );
}

/// Report a symbol the edge search offered without a destination.
///
/// # Panics (debug builds only)
/// Always, since reaching this is a defect in the edge search.
#[inline]
pub fn check_edge_has_target<S: Symbol>(state: StateId, symbol: &S) {
    if cfg!(debug_assertions) {
        panic!(
            "Contract violation: state {} offered {:?} but has no transition for it",
            state, symbol
        );
    }
}

/// Check that `found` is accepted and not smaller than `candidate`.
///
/// # Panics (debug builds only)
/// Panics if either half fails.
#[inline]
pub fn check_successor<S: Symbol>(dfa: &Dfa<S>, candidate: &[S], found: &[S]) {
    debug_assert!(
        found >= candidate,
        "Contract violation: successor {:?} precedes candidate {:?}",
        found,
        candidate
    );
    debug_assert!(
        dfa.accepts(found),
        "Contract violation: successor {:?} is not accepted",
        found
    );
}

// ============================================================================
// DICTIONARY CONTRACTS
// ============================================================================

/// Check that the entries on either side of `pos` are in non-decreasing
/// order.
///
/// Only the neighbourhood of a seek result is inspected, so a seek stays
/// logarithmic in debug builds. An unsorted slice is caught as soon as a
/// seek lands next to one of its descents.
///
/// # Panics (debug builds only)
/// Panics if `words[pos - 1] > words[pos]` or `words[pos] > words[pos + 1]`.
#[inline]
pub fn check_sorted_around<S: Ord>(words: &[Vec<S>], pos: usize) {
    if !cfg!(debug_assertions) {
        return;
    }
    let low = pos.saturating_sub(1);
    let high = (pos + 2).min(words.len());
    for i in low + 1..high {
        debug_assert!(
            words[i - 1] <= words[i],
            "Contract violation: dictionary entry {} sorts before entry {}",
            i,
            i - 1
        );
    }
}
