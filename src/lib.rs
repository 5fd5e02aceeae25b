//! Levenshtein automata and lazy dictionary intersection.
//!
//! Given a query word `w` and a bound `k`, this crate builds a finite
//! automaton accepting exactly the strings within `k` edits of `w`, and walks
//! it against a sorted dictionary to find every entry within the bound. The
//! walk leapfrogs between the automaton and the dictionary, so it touches only
//! the entries near an accepted string rather than scanning the whole list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ levenshtein  │────▶│    nfa       │────▶│     dfa      │
//! │ (build_nfa)  │     │ (closure,    │     │ (successor,  │
//! │              │     │  to_dfa)     │     │  accepts)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                   │
//! ┌──────────────┐     ┌──────────────┐             ▼
//! │   corpus     │────▶│  dictionary  │────▶┌──────────────┐
//! │ (load lines) │     │   (seek)     │     │  intersect   │
//! └──────────────┘     └──────────────┘     │ (leapfrog)   │
//!                                           └──────────────┘
//!                                                   │
//!                                                   ▼
//!                                           ┌──────────────┐
//!                                           │   suggest    │
//!                                           │ (did you     │
//!                                           │  mean?)      │
//!                                           └──────────────┘
//! ```
//!
//! Everything is generic over the symbol type through [`Alphabet`]:
//! [`CharRange`] for Unicode scalar values (optionally restricted to a range)
//! and [`Bytes`] for raw bytes.
//!
//! # Usage
//!
//! ```
//! use levdict::{Dictionary, LevenshteinAutomaton};
//!
//! let dictionary = Dictionary::from_words(["badge", "badger", "badgerss", "badher"]);
//! let automaton = LevenshteinAutomaton::new("badger", 1);
//!
//! let found: Vec<String> = automaton
//!     .matches(&dictionary)
//!     .map(|word| word.iter().collect())
//!     .collect();
//! assert_eq!(found, ["badge", "badger", "badher"]);
//! ```

pub mod alphabet;
pub mod contracts;
pub mod corpus;
pub mod dfa;
pub mod dictionary;
pub mod distance;
pub mod dot;
pub mod error;
pub mod intersect;
pub mod levenshtein;
pub mod logging;
pub mod nfa;
pub mod state;
pub mod suggest;
pub mod testing;

// Re-exports for public API
pub use alphabet::{Alphabet, Bytes, CharRange, Input, Symbol};
pub use corpus::{
    load_corpus, normalize_word, parse_corpus, Corpus, CorpusOptions, RejectReason, RejectedLine,
};
pub use dfa::{Dfa, StateId};
pub use dictionary::{Dictionary, OrderedLookup};
pub use distance::{edit_distance, levenshtein_within, str_distance};
pub use dot::{describe_dfa, write_dfa_dot, write_nfa_dot};
pub use error::{Error, Result};
pub use intersect::{all_matches, Intersection};
pub use levenshtein::{build_nfa, LevenshteinAutomaton};
pub use nfa::Nfa;
pub use state::{NfaState, StateSet};
pub use suggest::{
    check_distance, find_matches, match_batch, suggest, SuggestConfig, Suggestion, Suggestions,
    DISTANCE_LIMIT,
};
