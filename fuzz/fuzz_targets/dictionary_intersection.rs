// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lazy dictionary intersection.
//!
//! The leapfrog walk must report exactly the words a linear scan with the
//! bounded edit distance check finds, in order, each once.

#![no_main]

use arbitrary::Arbitrary;
use levdict::{levenshtein_within, Bytes, Dictionary, LevenshteinAutomaton};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct IntersectionInput {
    query: Vec<u8>,
    words: Vec<Vec<u8>>,
    max_distance: u8,
}

fuzz_target!(|input: IntersectionInput| {
    let query = &input.query[..input.query.len().min(10)];
    let k = usize::from(input.max_distance % 3);
    let words = input
        .words
        .into_iter()
        .take(64)
        .map(|mut w| {
            w.truncate(16);
            w
        });
    let dictionary = Dictionary::from_unsorted(words);

    let automaton = LevenshteinAutomaton::with_alphabet(query, k, Bytes);
    let found = automaton.all_matches(&dictionary);

    let expected: Vec<Vec<u8>> = dictionary
        .iter()
        .filter(|w| levenshtein_within(query, *w, k))
        .map(<[u8]>::to_vec)
        .collect();

    assert_eq!(found, expected);
});
