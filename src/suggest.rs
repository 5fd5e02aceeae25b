// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Did you mean?" correction on top of the Levenshtein automaton.
//!
//! An exact dictionary hit ends the search. Otherwise the bound widens one
//! edit at a time and the first non-empty match list wins, so the answer is
//! always the set of closest words within the configured maximum.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::alphabet::CharRange;
use crate::dictionary::Dictionary;
use crate::distance::edit_distance;
use crate::error::{Error, Result};
use crate::levenshtein::LevenshteinAutomaton;

/// Largest bound accepted from user input.
///
/// DFA size grows steeply with the bound; past this the automaton is larger
/// than a linear scan of any realistic dictionary.
pub const DISTANCE_LIMIT: usize = 8;

/// Reject a requested bound above [`DISTANCE_LIMIT`].
pub fn check_distance(requested: usize) -> Result<usize> {
    if requested > DISTANCE_LIMIT {
        return Err(Error::DistanceTooLarge {
            requested,
            max: DISTANCE_LIMIT,
        });
    }
    Ok(requested)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Widest bound tried before giving up.
    pub max_distance: usize,
    /// Alphabet the dictionary was validated against.
    pub alphabet: CharRange,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_distance: 5,
            alphabet: CharRange::UNICODE,
        }
    }
}

impl SuggestConfig {
    pub fn with_max_distance(max_distance: usize) -> Result<Self> {
        Ok(Self {
            max_distance: check_distance(max_distance)?,
            ..Self::default()
        })
    }
}

/// A dictionary word and its edit distance from the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
}

/// Outcome of [`suggest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestions {
    /// The word is in the dictionary.
    Exact { word: String },
    /// Closest words, all within `distance_bound` edits.
    Close {
        distance_bound: usize,
        matches: Vec<Suggestion>,
    },
    /// Nothing within `max_distance` edits.
    None { max_distance: usize },
}

/// Closest dictionary words to `word`, widening the bound up to the config's.
pub fn suggest(word: &str, dictionary: &Dictionary<char>, config: &SuggestConfig) -> Suggestions {
    let query: Vec<char> = word.chars().collect();
    if dictionary.contains(&query) {
        return Suggestions::Exact {
            word: word.to_string(),
        };
    }

    for k in 1..=config.max_distance {
        let automaton = LevenshteinAutomaton::with_alphabet(&query, k, config.alphabet);
        let matches: Vec<Suggestion> = automaton
            .matches(dictionary)
            .map(|found| Suggestion {
                word: found.iter().collect(),
                distance: edit_distance(&query, found),
            })
            .collect();

        if !matches.is_empty() {
            return Suggestions::Close {
                distance_bound: k,
                matches,
            };
        }
        debug!(word, k, "no words within distance");
    }

    Suggestions::None {
        max_distance: config.max_distance,
    }
}

/// Dictionary words within `max_distance` edits of `word`, ascending.
pub fn find_matches(word: &str, max_distance: usize, dictionary: &Dictionary<char>) -> Vec<String> {
    LevenshteinAutomaton::new(word, max_distance)
        .matches(dictionary)
        .map(|found| found.iter().collect())
        .collect()
}

/// Run independent `(word, max_distance)` queries against one dictionary.
///
/// Results come back in query order. Each query builds its own automaton, so
/// with the `parallel` feature they run on the rayon pool.
pub fn match_batch<W>(queries: &[(W, usize)], dictionary: &Dictionary<char>) -> Vec<Vec<String>>
where
    W: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        queries
            .par_iter()
            .map(|(word, k)| find_matches(word.as_ref(), *k, dictionary))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        queries
            .iter()
            .map(|(word, k)| find_matches(word.as_ref(), *k, dictionary))
            .collect()
    }
}
