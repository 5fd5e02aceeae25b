// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Symbol orderings and transition labels.
//!
//! The automata never do arithmetic on characters. Everything that needs
//! "the next symbol" (the successor search, the intersection driver) asks an
//! [`Alphabet`] instead, so the same machinery works over bytes, full Unicode,
//! or a restricted range like `a..=z` where the successor of `'z'` is `None`.
//!
//! The NFA labels its edges with [`Input`]: a literal symbol, the wildcard, or
//! epsilon. The wildcard never reaches the DFA as a symbol. It becomes an
//! optional default edge instead, so no real character can collide with it.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Bounds every automaton symbol type satisfies.
pub trait Symbol: Copy + Ord + Hash + Debug {}

impl<T: Copy + Ord + Hash + Debug> Symbol for T {}

/// A totally ordered alphabet with an explicit successor operation.
///
/// The order must be the same order the dictionary is sorted in. For `char`
/// that is code point order, which coincides with Rust's `String` ordering
/// (UTF-8 byte order).
pub trait Alphabet {
    type Symbol: Symbol;

    /// Smallest symbol of the alphabet.
    fn first(&self) -> Self::Symbol;

    /// Smallest alphabet symbol strictly greater than `symbol`.
    ///
    /// `symbol` need not belong to the alphabet: a symbol below the range
    /// yields the range's first symbol.
    fn after(&self, symbol: Self::Symbol) -> Option<Self::Symbol>;

    /// Whether `symbol` is a member of the alphabet.
    fn contains(&self, _symbol: Self::Symbol) -> bool {
        true
    }
}

/// Inclusive range of Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    low: char,
    high: char,
}

impl CharRange {
    /// Every Unicode scalar value.
    pub const UNICODE: CharRange = CharRange {
        low: '\0',
        high: char::MAX,
    };

    /// `a..=z`, the alphabet of a lowercased English word list.
    pub const LOWERCASE_ASCII: CharRange = CharRange {
        low: 'a',
        high: 'z',
    };

    pub fn new(low: char, high: char) -> Result<Self> {
        if low > high {
            return Err(Error::EmptyAlphabet { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> char {
        self.low
    }

    pub fn high(&self) -> char {
        self.high
    }
}

impl Default for CharRange {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Next scalar value, stepping over the surrogate block.
fn next_scalar(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        _ => char::from_u32(c as u32 + 1),
    }
}

impl Alphabet for CharRange {
    type Symbol = char;

    fn first(&self) -> char {
        self.low
    }

    fn after(&self, symbol: char) -> Option<char> {
        if symbol < self.low {
            return Some(self.low);
        }
        if symbol >= self.high {
            return None;
        }
        next_scalar(symbol)
    }

    fn contains(&self, symbol: char) -> bool {
        (self.low..=self.high).contains(&symbol)
    }
}

/// Raw bytes, `0x00..=0xFF`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bytes;

impl Alphabet for Bytes {
    type Symbol = u8;

    fn first(&self) -> u8 {
        0
    }

    fn after(&self, symbol: u8) -> Option<u8> {
        symbol.checked_add(1)
    }
}

/// Label on an NFA edge.
///
/// The derived order puts `Epsilon` and `Any` before every literal, which
/// keeps label sets sorted with the literals contiguous at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Input<S> {
    /// Taken without consuming input.
    Epsilon,
    /// Matches any single symbol.
    Any,
    Symbol(S),
}
