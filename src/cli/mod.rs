// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levdict command-line interface.
//!
//! Five subcommands: `match` lists corpus words within a fixed bound,
//! `suggest` widens the bound until something turns up, `interactive` does
//! the same for words typed at a prompt, `dot` exports an automaton for
//! Graphviz, and `inspect` prints its size and transition table.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use levdict::{CharRange, CorpusOptions};

#[derive(Parser)]
#[command(
    name = "levdict",
    about = "Dictionary lookup within an edit distance using Levenshtein automata",
    version
)]
pub struct Cli {
    /// Log filter directive (e.g. "debug", "levdict=trace"); overrides RUST_LOG
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List corpus words within a fixed edit distance of each query word
    Match {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Query words
        #[arg(required = true)]
        words: Vec<String>,

        /// Maximum edit distance
        #[arg(short = 'k', long, default_value = "1")]
        distance: usize,
    },

    /// "Did you mean?": closest corpus words, widening the bound as needed
    Suggest {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,

        /// Widest edit distance to try
        #[arg(long, default_value = "5")]
        max_distance: usize,
    },

    /// Prompt for words and suggest corrections until end of input
    Interactive {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Widest edit distance to try
        #[arg(long, default_value = "5")]
        max_distance: usize,
    },

    /// Write an automaton as a Graphviz digraph
    Dot {
        /// Query word
        word: String,

        /// Maximum edit distance
        #[arg(short = 'k', long, default_value = "1")]
        distance: usize,

        /// Export the NFA instead of the DFA
        #[arg(long)]
        nfa: bool,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show automaton sizes and the DFA transition table
    Inspect {
        /// Query word
        word: String,

        /// Maximum edit distance
        #[arg(short = 'k', long, default_value = "1")]
        distance: usize,

        /// Symbol range the automaton is searched over
        #[arg(long, value_enum, default_value_t = AlphabetChoice::Unicode)]
        alphabet: AlphabetChoice,
    },
}

/// Corpus file and how its lines become words.
#[derive(Args)]
pub struct CorpusArgs {
    /// Corpus file, one word per line
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Symbol range corpus words must stay within
    #[arg(long, value_enum, default_value_t = AlphabetChoice::Unicode)]
    pub alphabet: AlphabetChoice,

    /// Keep case and diacritics as written
    #[arg(long)]
    pub no_normalize: bool,
}

impl CorpusArgs {
    pub fn options(&self) -> CorpusOptions {
        CorpusOptions {
            alphabet: self.alphabet.range(),
            normalize: !self.no_normalize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlphabetChoice {
    /// Every Unicode scalar value
    Unicode,
    /// a-z only
    Lowercase,
}

impl AlphabetChoice {
    pub fn range(self) -> CharRange {
        match self {
            AlphabetChoice::Unicode => CharRange::UNICODE,
            AlphabetChoice::Lowercase => CharRange::LOWERCASE_ASCII,
        }
    }
}
