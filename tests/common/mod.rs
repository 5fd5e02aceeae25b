//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Write;

use levdict::{Dictionary, LevenshteinAutomaton};
use tempfile::NamedTempFile;

// Re-export canonical test utilities from levdict::testing
pub use levdict::testing::{all_strings, brute_force_matches, brute_force_successor, chars};

// ============================================================================
// FIXTURES
// ============================================================================

/// Small animal word list in the spirit of the demo corpus.
pub const ANIMALS: &[&str] = &[
    "aardvark", "badge", "badger", "badgers", "badges", "badher", "cat", "cats", "crocodile",
    "crocodiles", "duck", "duckling", "ducklings", "eagle", "giraffe", "hedgehog",
];

pub fn animals() -> Dictionary<char> {
    Dictionary::from_words(ANIMALS)
}

/// Write `lines` to a fresh temporary corpus file.
pub fn corpus_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp corpus");
    for line in lines {
        writeln!(file, "{}", line).expect("write temp corpus");
    }
    file.flush().expect("flush temp corpus");
    file
}

// ============================================================================
// HELPERS
// ============================================================================

/// Run the intersection and render matches back to strings.
pub fn matches(word: &str, k: usize, dictionary: &Dictionary<char>) -> Vec<String> {
    LevenshteinAutomaton::new(word, k)
        .matches(dictionary)
        .map(|m| m.iter().collect())
        .collect()
}

pub fn to_string(symbols: &[char]) -> String {
    symbols.iter().collect()
}
