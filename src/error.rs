// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate error type.
//!
//! Finding no match is not an error: the intersection simply yields nothing.
//! Errors cover malformed inputs handed to the core by its collaborators.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dictionary supplied as sorted has an entry smaller than its predecessor.
    #[error("dictionary is not sorted: entry {position} sorts before the entry preceding it")]
    UnsortedDictionary { position: usize },

    #[error("empty alphabet: {low:?} is greater than {high:?}")]
    EmptyAlphabet { low: char, high: char },

    #[error("distance bound {requested} exceeds the configured maximum of {max}")]
    DistanceTooLarge { requested: usize, max: usize },

    #[error("failed to read corpus {}", .path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
