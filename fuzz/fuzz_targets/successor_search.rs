// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for DFA successor search.
//!
//! Checks that the successor of any candidate is accepted, never sorts
//! below the candidate, and equals the candidate when it is accepted.

#![no_main]

use arbitrary::Arbitrary;
use levdict::{Bytes, LevenshteinAutomaton};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SuccessorInput {
    query: Vec<u8>,
    candidate: Vec<u8>,
    max_distance: u8,
}

fuzz_target!(|input: SuccessorInput| {
    // Cap sizes so DFA construction stays fast
    let query = &input.query[..input.query.len().min(12)];
    let candidate = &input.candidate[..input.candidate.len().min(24)];
    let k = usize::from(input.max_distance % 4);

    let automaton = LevenshteinAutomaton::with_alphabet(query, k, Bytes);

    match automaton.successor(candidate) {
        Some(found) => {
            assert!(found.as_slice() >= candidate, "successor moved backwards");
            assert!(automaton.accepts(&found), "successor not accepted");
            assert!(found.len() <= query.len() + k, "successor outside the ball");
            if automaton.accepts(candidate) {
                assert_eq!(found, candidate, "accepted candidate is its own successor");
            }
        }
        None => assert!(!automaton.accepts(candidate)),
    }
});
