// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sorted word lists with ordered lookup.
//!
//! The intersection driver needs exactly one query from a dictionary: "first
//! entry `>=` key". [`OrderedLookup`] is that seam. [`Dictionary`] is the owned
//! implementation, and a plain sorted `[Vec<S>]` slice works too.

use crate::contracts;
use crate::error::{Error, Result};

/// Read-only ordered lookup over a sorted sequence of words.
pub trait OrderedLookup<S> {
    /// Smallest entry `>= key`, or `None` if every entry is smaller.
    fn seek(&self, key: &[S]) -> Option<&[S]>;
}

/// Sorted sequence of words, each a sequence of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary<S> {
    words: Vec<Vec<S>>,
}

impl<S: Ord> Dictionary<S> {
    /// Wrap words that are already in ascending order.
    ///
    /// Duplicates are allowed; the intersection reports each word once.
    pub fn from_sorted(words: Vec<Vec<S>>) -> Result<Self> {
        if let Some(position) = (1..words.len()).find(|&i| words[i] < words[i - 1]) {
            return Err(Error::UnsortedDictionary { position });
        }
        Ok(Self { words })
    }

    /// Sort and deduplicate `words`.
    pub fn from_unsorted<I: IntoIterator<Item = Vec<S>>>(words: I) -> Self {
        let mut words: Vec<Vec<S>> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &[S]) -> bool {
        self.seek(word) == Some(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[S]> {
        self.words.iter().map(Vec::as_slice)
    }

    pub fn words(&self) -> &[Vec<S>] {
        &self.words
    }
}

impl Dictionary<char> {
    /// Build from strings in any order.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::from_unsorted(words.into_iter().map(|w| w.as_ref().chars().collect()))
    }

    /// Entries rendered back into strings, ascending.
    pub fn to_strings(&self) -> Vec<String> {
        self.words.iter().map(|w| w.iter().collect()).collect()
    }
}

/// First index whose entry is `>= key`.
fn lower_bound<S: Ord>(words: &[Vec<S>], key: &[S]) -> usize {
    words.partition_point(|word| word.as_slice() < key)
}

impl<S: Ord> OrderedLookup<S> for Dictionary<S> {
    /// Sortedness was established at construction, so this is a plain
    /// binary search.
    fn seek(&self, key: &[S]) -> Option<&[S]> {
        self.words.get(lower_bound(&self.words, key)).map(Vec::as_slice)
    }
}

impl<S: Ord> OrderedLookup<S> for [Vec<S>] {
    fn seek(&self, key: &[S]) -> Option<&[S]> {
        let pos = lower_bound(self, key);
        contracts::check_sorted_around(self, pos);
        self.get(pos).map(Vec::as_slice)
    }
}
