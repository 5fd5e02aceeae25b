// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: one word per line into a sorted [`Dictionary`].
//!
//! The automata assume every dictionary entry is a single normalized token
//! drawn from the alphabet they were built over. This is where that is
//! enforced. Lines that break it are skipped, logged, and reported back so a
//! caller can show them; they never reach the core.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};
#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::alphabet::{Alphabet, CharRange};
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};

/// How corpus lines become dictionary words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Every symbol of an accepted word must belong to this range.
    pub alphabet: CharRange,
    /// Lowercase (and strip diacritics, with `unicode-normalization`).
    pub normalize: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            alphabet: CharRange::UNICODE,
            normalize: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RejectReason {
    /// The line holds more than one whitespace-separated token.
    MultipleTokens,
    /// The word contains a symbol outside the configured alphabet.
    OutsideAlphabet { symbol: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
    pub reason: RejectReason,
}

/// A loaded corpus: the dictionary plus whatever was turned away.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub dictionary: Dictionary<char>,
    pub rejected: Vec<RejectedLine>,
}

/// Normalize a single word: strip diacritics, then lowercase.
///
/// - "Café" → "cafe"
/// - "Tummalachērla" → "tummalacherla"
#[cfg(feature = "unicode-normalization")]
pub fn normalize_word(word: &str) -> String {
    word.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only, for builds without `unicode-normalization`.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
}

/// Combining marks (Unicode category Mn) in the common diacritic blocks.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Read a corpus from `reader`, one word per line.
pub fn parse_corpus<R: BufRead>(reader: R, options: &CorpusOptions) -> Result<Corpus> {
    let mut words: Vec<Vec<char>> = Vec::new();
    let mut rejected = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        let Some(token) = tokens.next() else {
            continue;
        };

        let reject = |reason: RejectReason| RejectedLine {
            line: index + 1,
            text: line.clone(),
            reason,
        };

        if tokens.next().is_some() {
            warn!(line = index + 1, text = %line, "corpus line holds more than one word, skipped");
            rejected.push(reject(RejectReason::MultipleTokens));
            continue;
        }

        let word = if options.normalize {
            normalize_word(token)
        } else {
            token.to_string()
        };

        if let Some(symbol) = word.chars().find(|&c| !options.alphabet.contains(c)) {
            warn!(line = index + 1, word = %word, ?symbol, "corpus word outside alphabet, skipped");
            rejected.push(reject(RejectReason::OutsideAlphabet { symbol }));
            continue;
        }

        words.push(word.chars().collect());
    }

    let dictionary = Dictionary::from_unsorted(words);
    debug!(
        words = dictionary.len(),
        rejected = rejected.len(),
        "corpus loaded"
    );
    Ok(Corpus {
        dictionary,
        rejected,
    })
}

/// Read the corpus file at `path`.
pub fn load_corpus<P: AsRef<Path>>(path: P, options: &CorpusOptions) -> Result<Corpus> {
    let path = path.as_ref();
    let with_path = |source| Error::Corpus {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(with_path)?;
    parse_corpus(BufReader::new(file), options).map_err(|err| match err {
        Error::Io(source) => with_path(source),
        other => other,
    })
}
