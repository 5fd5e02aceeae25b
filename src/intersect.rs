// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy intersection of a DFA's language with a sorted dictionary.
//!
//! Two monotone cursors leapfrog each other. The DFA proposes the smallest
//! accepted string `>=` the current candidate; the dictionary answers with its
//! first entry `>=` that proposal. Equal means a match. Otherwise the
//! dictionary entry becomes the next candidate and the DFA catches up.
//!
//! ```text
//!   query "badger", k = 1
//!
//!   candidate    successor    seek        outcome
//!   ""           "\0adger"    "badge"     leap
//!   "badge"      "badge"      "badge"     match
//!   "badge\0"    "badge\0"    "badger"    leap
//!   "badger"     "badger"     "badger"    match
//! ```
//!
//! Neither side ever moves backwards and both domains are finite, so the walk
//! ends as soon as either side runs out. Work is proportional to the number of
//! leaps, not to the dictionary size times the automaton size.

use std::iter::FusedIterator;

use tracing::trace;

use crate::alphabet::Alphabet;
use crate::dfa::Dfa;
use crate::dictionary::OrderedLookup;

/// Iterator over dictionary entries accepted by a DFA, ascending.
pub struct Intersection<'a, A: Alphabet, D: ?Sized> {
    dfa: &'a Dfa<A::Symbol>,
    alphabet: &'a A,
    dictionary: &'a D,
    /// Next string to hand to the successor search; `None` once exhausted.
    candidate: Option<Vec<A::Symbol>>,
}

impl<'a, A, D> Intersection<'a, A, D>
where
    A: Alphabet,
    D: OrderedLookup<A::Symbol> + ?Sized,
{
    pub fn new(dfa: &'a Dfa<A::Symbol>, alphabet: &'a A, dictionary: &'a D) -> Self {
        Self {
            dfa,
            alphabet,
            dictionary,
            candidate: Some(Vec::new()),
        }
    }
}

impl<'a, A, D> Iterator for Intersection<'a, A, D>
where
    A: Alphabet,
    D: OrderedLookup<A::Symbol> + ?Sized,
{
    type Item = &'a [A::Symbol];

    fn next(&mut self) -> Option<Self::Item> {
        let dictionary = self.dictionary;
        loop {
            let candidate = self.candidate.take()?;
            let proposal = self.dfa.successor(self.alphabet, &candidate)?;
            let entry = dictionary.seek(&proposal)?;
            trace!(proposal = ?proposal, entry = ?entry, "intersection leap");

            if entry == proposal.as_slice() {
                // Smallest string strictly greater than the match.
                let mut next = proposal;
                next.push(self.alphabet.first());
                self.candidate = Some(next);
                return Some(entry);
            }
            self.candidate = Some(entry.to_vec());
        }
    }
}

impl<'a, A, D> FusedIterator for Intersection<'a, A, D>
where
    A: Alphabet,
    D: OrderedLookup<A::Symbol> + ?Sized,
{
}

/// Every entry of `dictionary` accepted by `dfa`, ascending, each once.
pub fn all_matches<A, D>(dfa: &Dfa<A::Symbol>, alphabet: &A, dictionary: &D) -> Vec<Vec<A::Symbol>>
where
    A: Alphabet,
    D: OrderedLookup<A::Symbol> + ?Sized,
{
    Intersection::new(dfa, alphabet, dictionary)
        .map(<[A::Symbol]>::to_vec)
        .collect()
}
